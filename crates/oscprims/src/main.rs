mod cmd;
mod exit;
mod logging;
mod output;
mod values;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "oscprims", version, about = "Open Sound Control message sender")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version also arrive here and are not failures.
            std::process::exit(if err.use_stderr() {
                exit::USAGE
            } else {
                exit::SUCCESS
            });
        }
    };
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_send_subcommand() {
        let cli = Cli::try_parse_from([
            "oscprims",
            "send",
            "/chatbox/input",
            "--tags",
            "sT",
            "Hello VRChat!",
            "--port",
            "9001",
        ])
        .expect("send args should parse");

        match cli.command {
            Command::Send(args) => {
                assert_eq!(args.message.address, "/chatbox/input");
                assert_eq!(args.message.tags, "sT");
                assert_eq!(args.message.values, vec!["Hello VRChat!".to_string()]);
                assert_eq!(args.target.port, 9001);
            }
            other => panic!("expected send, got {other:?}"),
        }
    }

    #[test]
    fn accepts_negative_numeric_values() {
        let cli = Cli::try_parse_from(["oscprims", "encode", "/n", "-t", "if", "-5", "-0.5"])
            .expect("negative values should parse");

        match cli.command {
            Command::Encode(args) => {
                assert_eq!(args.message.values, vec!["-5".to_string(), "-0.5".to_string()]);
            }
            other => panic!("expected encode, got {other:?}"),
        }
    }

    #[test]
    fn tags_default_to_empty() {
        let cli = Cli::try_parse_from(["oscprims", "encode", "/ping"]).expect("should parse");
        match cli.command {
            Command::Encode(args) => {
                assert!(args.message.tags.is_empty());
                assert_eq!(args.buffer_size, 1024);
            }
            other => panic!("expected encode, got {other:?}"),
        }
    }

    #[test]
    fn parses_chatbox_subcommand() {
        let cli = Cli::try_parse_from(["oscprims", "chatbox", "hi", "--no-immediate"])
            .expect("chatbox args should parse");
        assert!(matches!(cli.command, Command::Chatbox(ref args) if args.no_immediate));
    }

    #[test]
    fn rejects_buffer_size_beyond_one_datagram() {
        for size in ["18446744073709551615", "65508", "0"] {
            let err = Cli::try_parse_from(["oscprims", "encode", "/p", "--buffer-size", size])
                .expect_err("buffer size out of range should fail");
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }

        let cli = Cli::try_parse_from(["oscprims", "send", "/p", "--buffer-size", "65507"])
            .expect("largest datagram size should parse");
        assert!(matches!(cli.command, Command::Send(ref args) if args.target.buffer_size == 65_507));
    }

    #[test]
    fn rejects_invalid_port() {
        let err = Cli::try_parse_from(["oscprims", "send", "/p", "--port", "70000"])
            .expect_err("port out of range should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
