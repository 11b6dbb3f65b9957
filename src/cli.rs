use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Send a single HTTP request and print the status code with the JSON body.
///
/// GET is the default; parameters are appended to the URL as a query string.
/// With --post, parameters are sent as a UTF-8 form body instead.
///
/// The response body must be a JSON object. Output is printed as
/// {"code": <status>, "data": {...}}.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Target URL, without a query string.
    pub url: Option<String>,

    /// Send a POST with form-encoded parameters instead of a GET.
    #[arg(short = 'P', long = "post", help_heading = "Request")]
    pub post: bool,

    /// Request parameter as KEY=VALUE. Repeat for more parameters.
    #[arg(
        short = 'd',
        long = "param",
        value_name = "KEY=VALUE",
        help_heading = "Request"
    )]
    pub params: Vec<String>,

    /// Request header as 'NAME: VALUE'. Repeat for more headers.
    #[arg(
        short = 'H',
        long = "header",
        value_name = "NAME: VALUE",
        help_heading = "Request"
    )]
    pub headers: Vec<String>,

    /// Connect timeout in milliseconds for this request. Overrides config.
    #[arg(long = "connect-timeout-ms", help_heading = "Timeouts")]
    pub connect_timeout_ms: Option<u64>,

    /// Read timeout in milliseconds for this request. Overrides config.
    #[arg(long = "read-timeout-ms", help_heading = "Timeouts")]
    pub read_timeout_ms: Option<u64>,

    /// Do not follow redirects; the redirect response itself is decoded.
    #[arg(long = "no-redirects", help_heading = "Request")]
    pub no_redirects: bool,

    /// Save the timeout, redirect and log file options given on this command line to the config file
    #[arg(long = "save-config", help_heading = "Configuration")]
    pub save_config: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Mirror log output to stderr in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
