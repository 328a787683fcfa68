//! CLI for focalmeta: print camera metadata for JPEG files or directories.

#![cfg(feature = "cli")]

use clap::Parser;
use focalmeta::{parse_exif_file, ExifData};
use indexmap::IndexMap;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "focalmeta")]
#[command(about = "Extract camera metadata (focal length, ISO, aperture, shutter speed, model) from JPEG EXIF", long_about = None)]
struct Args {
    /// Path to a file or directory to scan (use -d/--directory to scan a whole directory)
    path: Option<String>,

    /// Scan a whole directory (optionally with -r to recurse into subdirectories)
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    directory: Option<String>,

    /// When scanning a directory, recurse into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// File extensions to scan (comma-separated). No-extension files are always scanned.
    #[arg(short, long, default_value = "jpg,jpeg")]
    extensions: String,

    /// Output JSON per result (one line per file unless --pretty)
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON (use with --json)
    #[arg(long)]
    pretty: bool,

    /// Quiet: only print files that carry at least one decoded field
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let exts: std::collections::HashSet<String> = args
        .extensions
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .collect();

    let path_str = args
        .directory
        .as_ref()
        .or(args.path.as_ref())
        .ok_or("Missing path: give a file/directory as argument or use -d/--directory <DIR>")?;
    let path = Path::new(path_str.as_str());

    if !path.exists() {
        eprintln!("Not found: {}", path.display());
        std::process::exit(1);
    }

    if path.is_file() {
        if args.directory.is_some() {
            eprintln!("--directory expects a directory, not a file: {}", path.display());
            std::process::exit(1);
        }
        scan_file(path, &args, &exts).await?;
        return Ok(());
    }

    if path.is_dir() {
        if !args.quiet {
            eprintln!(
                "Scanning directory: {} {}",
                path.display(),
                if args.recursive { "(recursive)" } else { "" }
            );
        }
        scan_dir(path, &args, &exts).await?;
        return Ok(());
    }

    eprintln!("Not a file or directory: {}", path.display());
    std::process::exit(1);
}

async fn scan_file(
    path: &Path,
    args: &Args,
    exts: &std::collections::HashSet<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    // Skip only when the file has an extension not in the list; no extension
    // means always scan (content is checked for the JPEG magic anyway).
    if !ext.is_empty() && !exts.is_empty() && !exts.contains(&ext) {
        if !args.quiet {
            eprintln!("Skip (extension): {}", path.display());
        }
        return Ok(());
    }
    let exif = parse_exif_file(path).await?;
    print_result(path.display().to_string(), &exif, args)?;
    Ok(())
}

async fn scan_dir(
    dir: &Path,
    args: &Args,
    exts: &std::collections::HashSet<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let walker = if args.recursive {
        WalkDir::new(dir).into_iter()
    } else {
        WalkDir::new(dir).max_depth(1).into_iter()
    };

    let mut total = 0u64;
    let mut with_metadata = 0u64;

    for entry in walker.filter_entry(|e| !e.path().starts_with(".")) {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !ext.is_empty() && !exts.is_empty() && !exts.contains(&ext) {
            continue;
        }
        total += 1;
        let exif = match parse_exif_file(path).await {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !exif.is_empty() {
            with_metadata += 1;
        }
        print_result(path.display().to_string(), &exif, args)?;
    }

    if !args.quiet {
        eprintln!("Scanned {} files, {} with metadata", total, with_metadata);
    }
    Ok(())
}

fn print_result(
    path: String,
    exif: &ExifData,
    args: &Args,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.quiet && exif.is_empty() {
        return Ok(());
    }
    if args.json {
        let mut out = IndexMap::<String, serde_json::Value>::new();
        out.insert("path".to_string(), serde_json::Value::String(path));
        out.insert("focal_length".to_string(), serde_json::to_value(exif.focal_length)?);
        out.insert("model".to_string(), serde_json::to_value(&exif.model)?);
        out.insert("iso".to_string(), serde_json::to_value(exif.iso)?);
        out.insert("aperture".to_string(), serde_json::to_value(&exif.aperture)?);
        out.insert("shutter_speed".to_string(), serde_json::to_value(&exif.shutter_speed)?);
        let json_str = if args.pretty {
            serde_json::to_string_pretty(&out)?
        } else {
            serde_json::to_string(&out)?
        };
        println!("{}", json_str);
        return Ok(());
    }

    println!("{}", path);
    if exif.is_empty() {
        println!("  no EXIF metadata");
        return Ok(());
    }
    if let Some(mm) = exif.focal_length {
        println!("  focal length: {} mm", mm);
    }
    if let Some(ref model) = exif.model {
        println!("  model: {}", model);
    }
    if let Some(iso) = exif.iso {
        println!("  iso: {}", iso);
    }
    if let Some(ref aperture) = exif.aperture {
        println!("  aperture: {}", aperture);
    }
    if let Some(ref shutter) = exif.shutter_speed {
        println!("  shutter: {}", shutter);
    }
    Ok(())
}
