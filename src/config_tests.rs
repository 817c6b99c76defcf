#[cfg(test)]
mod tests {
    use crate::config::{Cli, Command, ServeArgs, Transport, DEFAULT_BIND};
    use clap::Parser;

    #[test]
    fn test_defaults_to_stdio_serve() {
        let cli = Cli::parse_from(["sample-mcp"]);
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.command(), Command::Serve(ServeArgs::default()));
    }

    #[test]
    fn test_serve_defaults_match_flag_defaults() {
        let cli = Cli::parse_from(["sample-mcp", "serve"]);
        assert_eq!(cli.command(), Command::Serve(ServeArgs::default()));
        assert_eq!(DEFAULT_BIND.to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn test_http_transport() {
        let cli = Cli::parse_from([
            "sample-mcp",
            "serve",
            "--transport",
            "http",
            "--bind",
            "0.0.0.0:9000",
        ]);
        match cli.command() {
            Command::Serve(args) => {
                assert_eq!(args.transport, Transport::Http);
                assert_eq!(args.bind.port(), 9000);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_call_arguments() {
        let cli = Cli::parse_from([
            "sample-mcp",
            "--log-level",
            "debug",
            "call",
            "add",
            "--args",
            r#"{"a":1,"b":2}"#,
        ]);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(
            cli.command(),
            Command::Call {
                name: "add".to_string(),
                args: r#"{"a":1,"b":2}"#.to_string(),
            }
        );
    }
}
