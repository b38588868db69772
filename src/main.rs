// ClipStack - Point d'entree
// Historique du presse-papiers pilote au clavier, hote console
//
// Ce binaire lance l'hote console : il lit une commande par ligne sur
// l'entree standard (voir `app.rs`) et affiche le bezel et le menu en
// texte sur la sortie standard. Les logs partent sur stderr.
//
// # Configuration
// Le fichier <config_dir>/clipstack/config.toml est lu au demarrage ;
// les valeurs manquantes utilisent les defauts. `--print-config` affiche
// la configuration par defaut.

use clipstack::app::{App, AppPaths};
use clipstack::config::Settings;
use std::path::PathBuf;

/// Initialise les logs (niveau `info`, surchargeable par RUST_LOG).
fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_help() {
    println!("clipstack {}", env!("CARGO_PKG_VERSION"));
    println!("Clipboard history stack driven from the keyboard\n");
    println!("USAGE:");
    println!("    clipstack [OPTIONS]\n");
    println!("OPTIONS:");
    println!("    --config <PATH>     Configuration file");
    println!("    --history <PATH>    History file");
    println!("    --print-config      Print the default configuration to stdout");
    println!("    --version, -V       Print version information");
    println!("    --help, -h          Print this help message");
}

/// Point d'entree principal de ClipStack.
///
/// En cas d'erreur fatale, affiche un message sur stderr et termine
/// le processus avec un code de sortie non nul.
fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut paths = AppPaths::in_dir(&AppPaths::default_dir());

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--print-config" => {
                match Settings::default().to_toml() {
                    Ok(s) => print!("{s}"),
                    Err(e) => {
                        eprintln!("error: {e}");
                        std::process::exit(1);
                    }
                }
                return;
            }
            "--version" | "-V" => {
                println!("clipstack {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            "--config" | "--history" if i + 1 < args.len() => {
                let value = PathBuf::from(&args[i + 1]);
                if args[i] == "--config" {
                    paths.config = value;
                } else {
                    paths.history = value;
                }
                i += 1;
            }
            other => {
                eprintln!("error: unexpected argument '{other}'");
                print_help();
                std::process::exit(2);
            }
        }
        i += 1;
    }

    setup_logging();

    match App::new(&paths) {
        Ok(mut app) => {
            if let Err(e) = app.run() {
                eprintln!("ClipStack fatal error: {}", e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("ClipStack init error: {}", e);
            std::process::exit(1);
        }
    }
}
