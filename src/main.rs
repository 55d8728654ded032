use std::io::IsTerminal;
use zeph::cli;

fn main() {
    let stderr = std::io::stderr();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_ansi(stderr.is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let result = cli::parse_args(std::env::args().skip(1))
        .and_then(|command| cli::run(&command, &mut std::io::stdout().lock()));

    match result {
        Ok(()) => {}
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("stdout closed early");
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}", e);
            eprintln!("Run 'zeph --help' for usage.");
            std::process::exit(1);
        }
    }
}
