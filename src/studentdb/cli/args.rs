use clap::Parser;
use studentdb::backend::BackendKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "studentdb")]
#[command(about = "Menu-driven student records with undo/redo", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Persistence backend: binary or json
    #[arg(short, long)]
    pub backend: Option<BackendKind>,

    /// Data file (defaults to studentdb.bin or studentdb.json)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Config file (defaults to ./studentdb.config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["studentdb"]).unwrap();
        assert!(cli.backend.is_none());
        assert!(cli.file.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_backend_and_file() {
        let cli =
            Cli::try_parse_from(["studentdb", "--backend", "json", "-f", "class.json", "-v"])
                .unwrap();
        assert_eq!(cli.backend, Some(BackendKind::Json));
        assert_eq!(cli.file, Some(PathBuf::from("class.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_backend_rejected() {
        assert!(Cli::try_parse_from(["studentdb", "--backend", "pickle"]).is_err());
    }
}
