use crate::cli::Args;
use http_helper::{
    AppError, ClientSettings, Config, HttpClientHelper, RequestHeaders, RequestParameters,
    ResponseResult,
};

/// Validates command line argument combinations.
///
/// A URL is required unless the configuration is being listed or saved.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.list_config || args.save_config {
        return Ok(());
    }
    match args.url.as_deref() {
        Some(url) if !url.trim().is_empty() => Ok(()),
        _ => Err(AppError::config_error(
            "A target URL is required (see --help)",
        )),
    }
}

/// Parses repeated `KEY=VALUE` arguments. Only the first `=` separates key from value.
pub fn parse_params(raw: &[String]) -> Result<RequestParameters, AppError> {
    raw.iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(AppError::config_error(format!(
                "Invalid parameter '{pair}', expected KEY=VALUE"
            ))),
        })
        .collect()
}

/// Parses repeated `NAME: VALUE` arguments. Surrounding whitespace is trimmed.
pub fn parse_headers(raw: &[String]) -> Result<RequestHeaders, AppError> {
    raw.iter()
        .map(|line| match line.split_once(':') {
            Some((name, value)) if !name.trim().is_empty() => {
                Ok((name.trim().to_string(), value.trim().to_string()))
            }
            _ => Err(AppError::config_error(format!(
                "Invalid header '{line}', expected 'NAME: VALUE'"
            ))),
        })
        .collect()
}

/// Client settings from config, with per-invocation overrides from the command line.
///
/// The overridden configuration goes through the same validation as a saved one,
/// so e.g. `--read-timeout-ms 0` is rejected before any request is made.
pub fn build_settings(args: &Args, config: &Config) -> Result<ClientSettings, AppError> {
    let effective = apply_config_overrides(args, config);
    effective.validate()?;
    Ok(ClientSettings::from(&effective))
}

/// Applies the persistable command line options on top of `config`.
pub fn apply_config_overrides(args: &Args, config: &Config) -> Config {
    let mut updated = config.clone();
    if let Some(ms) = args.connect_timeout_ms {
        updated.connect_timeout_ms = ms;
    }
    if let Some(ms) = args.read_timeout_ms {
        updated.socket_timeout_ms = ms;
    }
    if args.no_redirects {
        updated.follow_redirects = false;
    }
    if let Some(log_file) = &args.log_file {
        updated.log_file_path = Some(log_file.clone());
    }
    updated
}

/// Handles the --save-config command.
///
/// Validates the updated configuration before writing it.
pub fn handle_save_config_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let updated = apply_config_overrides(args, config);
    updated.validate()?;
    updated.save()?;
    println!("Config saved to {}", Config::get_config_path());
    Ok(())
}

/// Handles the --list-config command.
pub fn handle_list_config_command(config: &Config) -> Result<(), AppError> {
    println!("\n{}", config.describe());
    Ok(())
}

/// Sends the request described by the arguments and prints `{code, data}` as JSON.
pub fn handle_request_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let result = execute_request(args, config)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn execute_request(args: &Args, config: &Config) -> Result<ResponseResult, AppError> {
    let url = args.url.as_deref().unwrap_or_default();
    let params = parse_params(&args.params)?;
    let headers = parse_headers(&args.headers)?;
    let helper = HttpClientHelper::with_settings(build_settings(args, config)?);

    if args.post {
        helper.post(url, Some(&params), Some(&headers))
    } else {
        helper.get(url, Some(&params), Some(&headers))
    }
}
