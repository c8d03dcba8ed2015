use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use notary_certificate::{CertificateConfig, CertificateRenderer, DEFAULT_FONT_PATH, DOWNLOAD_FILE_NAME};
use notary_engine::logging::{init_logging, LoggingConfig};

const DEFAULT_NAME: &str = "高风亮节";

/// 戒色公证生成器: upload a photo, get a certificate.
#[derive(Debug, Parser)]
#[command(name = "notary-studio", version, about)]
struct Args {
    /// Photo to place on the certificate (JPEG, PNG, ...).
    #[arg(short, long)]
    photo: PathBuf,

    /// Name printed on the signature line.
    #[arg(short, long, default_value = DEFAULT_NAME)]
    name: String,

    /// Font asset used for every text element.
    #[arg(short, long, default_value = DEFAULT_FONT_PATH)]
    font: PathBuf,

    /// Where to write the JPEG.
    #[arg(short, long, default_value = DOWNLOAD_FILE_NAME)]
    out: PathBuf,

    /// Print this date instead of today's (YYYY-MM-DD).
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Log filter, env_logger syntax (overrides RUST_LOG).
    #[arg(long)]
    log: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &args.log {
        logging = logging.with_filter(filter.clone());
    }
    init_logging(logging);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ 错误：{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    // Fonts first: a missing asset should be reported even if the photo is bad.
    let config = CertificateConfig::default().with_font_path(&args.font);
    let renderer = CertificateRenderer::load(&config)?;

    let photo = std::fs::read(&args.photo)
        .with_context(|| format!("cannot read photo {}", args.photo.display()))?;
    log::debug!("read {} ({} bytes)", args.photo.display(), photo.len());

    match args.date {
        Some(date) => log::info!("using date override {date}"),
        None => log::debug!("using today's local date"),
    }

    let cert = match args.date {
        Some(date) => renderer.render_on(&photo, &args.name, date),
        None => renderer.render(&photo, &args.name),
    };

    cert.save_jpeg(&args.out)
        .with_context(|| format!("cannot save certificate to {}", args.out.display()))?;

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║        戒 色 公 证 办 事 处            ║");
    println!("  ╚════════════════════════════════════════╝");
    println!("  {} × {}  ·  {}  ·  {}", cert.width(), cert.height(), cert.layout().date_text, args.out.display());
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_in_name_font_and_output() {
        let args = Args::try_parse_from(["notary-studio", "--photo", "me.png"]).unwrap();
        assert_eq!(args.name, "高风亮节");
        assert_eq!(args.font, PathBuf::from("simhei.ttf"));
        assert_eq!(args.out, PathBuf::from("jiese.jpg"));
        assert!(args.date.is_none());
    }

    #[test]
    fn date_override_parses_iso_dates() {
        let args = Args::try_parse_from(["notary-studio", "-p", "a.jpg", "--date", "2026-10-14"]).unwrap();
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2026, 10, 14));
        assert!(Args::try_parse_from(["notary-studio", "-p", "a.jpg", "--date", "14/10/2026"]).is_err());
    }

    #[test]
    fn photo_is_required() {
        assert!(Args::try_parse_from(["notary-studio"]).is_err());
    }

    #[test]
    fn missing_font_fails_before_reading_photo() {
        let args = Args::try_parse_from([
            "notary-studio",
            "--photo",
            "/nonexistent/photo.jpg",
            "--font",
            "/nonexistent/simhei.ttf",
        ])
        .unwrap();
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("未找到字体文件"), "{err:#}");
    }
}
