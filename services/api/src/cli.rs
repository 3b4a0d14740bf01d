use crate::report::{run_assess, AssessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use news_trust::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "News Trust",
    about = "Rate the trustworthiness of aggregated news articles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score one article or a JSON array of articles and print the ratings
    Assess(AssessArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["news-trust"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_assess_flags() {
        let cli = Cli::try_parse_from([
            "news-trust",
            "assess",
            "articles.json",
            "--registry",
            "sources.csv",
            "--default-credibility",
            "60",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.input.as_deref(), Some(std::path::Path::new("articles.json")));
                assert_eq!(args.default_credibility, Some(60));
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_default_credibility_outside_range() {
        let result = Cli::try_parse_from(["news-trust", "assess", "--default-credibility", "95"]);
        assert!(result.is_err());
    }
}
