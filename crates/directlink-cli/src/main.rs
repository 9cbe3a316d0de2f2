//! Directlink CLI
//!
//! 一次性转换链接或还原密码片段

mod output;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use directlink_core::{AppSettings, ConversionMode, convert, decode_password};
use tracing_subscriber::EnvFilter;

use output::Conversion;

#[derive(Parser)]
#[command(
    name = "directlink",
    version,
    about = "Google Drive 分享链接 / 自定义 URL 直链转换"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 转换链接
    Convert {
        /// 分享链接或自定义 URL
        url: String,
        /// 转换模式 (google-drive | custom-domain，默认取配置文件)
        #[arg(short, long)]
        mode: Option<ConversionMode>,
        /// 附加到片段中的密码
        #[arg(short, long, default_value = "")]
        password: String,
        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },
    /// 还原链接片段中的密码
    Decode {
        /// `#` 之后的片段，或完整链接
        fragment: String,
    },
}

fn main() -> Result<()> {
    // 默认的 tracing-log 特性会在 try_init 中桥接 log crate（directlink-core 使用）
    if let Err(e) = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init()
    {
        eprintln!("Failed to initialize logging: {e}");
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            url,
            mode,
            password,
            json,
        } => {
            let mode = mode.unwrap_or_else(|| AppSettings::load().default_mode);
            let output = run_convert(mode, &url, &password)?;

            if json {
                let conversion = Conversion::new(mode, &url, !password.is_empty(), output);
                println!("{}", serde_json::to_string_pretty(&conversion)?);
            } else {
                println!("{output}");
            }
        }
        Commands::Decode { fragment } => {
            let password = decode_password(fragment_of(&fragment))
                .context("Failed to decode password fragment")?;
            println!("{password}");
        }
    }

    Ok(())
}

/// 转换链接；结果为空时返回错误
fn run_convert(mode: ConversionMode, url: &str, password: &str) -> Result<String> {
    let output = convert(mode, url, password);
    tracing::debug!("Converted in {mode} mode");

    if output.is_empty() {
        match mode {
            ConversionMode::GoogleDrive => {
                bail!("No Google Drive file id (/d/<id>) found in '{url}'")
            }
            ConversionMode::CustomDomain => bail!("Nothing to convert"),
        }
    }
    Ok(output)
}

/// 取最后一个 `#` 之后的片段；没有 `#` 时原样返回
fn fragment_of(input: &str) -> &str {
    input.rsplit_once('#').map_or(input, |(_, fragment)| fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_without_file_id_fails() {
        let err = run_convert(
            ConversionMode::GoogleDrive,
            "https://drive.google.com/drive/folders",
            "hi",
        )
        .unwrap_err();
        assert!(err.to_string().contains("file id"));
    }

    #[test]
    fn test_convert_empty_custom_url_fails() {
        assert!(run_convert(ConversionMode::CustomDomain, "", "").is_err());
    }

    #[test]
    fn test_convert_success() {
        assert_eq!(
            run_convert(
                ConversionMode::GoogleDrive,
                "https://drive.google.com/file/d/1A2b3C4d5E/view?usp=sharing",
                "hi",
            )
            .unwrap(),
            "https://drive.google.com/uc?export=download&id=1A2b3C4d5E#aGk="
        );
        // 仅有密码时也有输出
        assert_eq!(
            run_convert(ConversionMode::CustomDomain, "", "hi").unwrap(),
            "#aGk="
        );
    }

    #[test]
    fn test_fragment_of() {
        assert_eq!(fragment_of("https://x/y#aGk="), "aGk=");
        assert_eq!(fragment_of("aGk="), "aGk=");
        assert_eq!(fragment_of("#aGk="), "aGk=");
        assert_eq!(decode_password(fragment_of("https://x/y#aGk=")).unwrap(), "hi");
    }
}
