//! # xtask - 开发辅助工具
//!
//! 提供本地质量门禁与开发辅助命令。
//!
//! ## 命令
//!
//! - `check-all`: 运行 fmt、clippy、test
//! - `cov-runtime`: 运行 folio-runtime 覆盖率
//! - `cov-workspace`: 运行 workspace 覆盖率
//! - `site-check`: 检查站点内容文件（格式、必填项、资源引用）

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use clap::{Parser, Subcommand};
use folio_runtime::SiteConfig;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "开发辅助工具")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 运行 fmt、clippy、test 门禁检查
    CheckAll,

    /// 运行 folio-runtime 覆盖率报告
    CovRuntime,

    /// 运行 workspace 覆盖率报告
    CovWorkspace,

    /// 检查站点内容文件
    SiteCheck {
        /// 内容文件或目录（默认：content）
        path: Option<PathBuf>,

        /// 静态资源根目录，用于检查图片和简历是否存在
        #[arg(long, default_value = "host-dioxus/public")]
        assets: PathBuf,

        /// 输出补全默认值后的配置
        #[arg(long)]
        dump: bool,
    },
}

fn run(step: &str, cmd: &mut Command) -> anyhow::Result<()> {
    eprintln!("\n==> {step}");
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("{step} failed with {status}");
    }
    Ok(())
}

fn ensure_cargo_llvm_cov_available() -> anyhow::Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.args(["llvm-cov", "--version"]);
    let status = cmd.status();
    match status {
        Ok(s) if s.success() => Ok(()),
        _ => anyhow::bail!(
            "cargo llvm-cov 不可用。\n\
请先安装：\n\
  - cargo install cargo-llvm-cov\n\
  - rustup component add llvm-tools-preview\n\
然后重试。"
        ),
    }
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("xtask error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::CheckAll) => {
            let mut fmt = Command::new("cargo");
            fmt.args(["fmt", "--all", "--", "--check"]);
            run("cargo fmt --all -- --check", &mut fmt)?;

            let mut clippy = Command::new("cargo");
            clippy.args(["clippy", "--workspace", "--all-targets"]);
            run("cargo clippy --workspace --all-targets", &mut clippy)?;

            let mut test = Command::new("cargo");
            test.args(["test", "--workspace"]);
            run("cargo test --workspace", &mut test)?;
        }
        Some(Commands::CovRuntime) => {
            ensure_cargo_llvm_cov_available()?;

            let mut cov = Command::new("cargo");
            cov.args(["llvm-cov", "-p", "folio-runtime", "--all-features", "--html"]);
            run(
                "cargo llvm-cov -p folio-runtime --all-features --html",
                &mut cov,
            )?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        Some(Commands::CovWorkspace) => {
            ensure_cargo_llvm_cov_available()?;

            // 排除 xtask，宿主组件基本没有单测，只看趋势
            let mut cov = Command::new("cargo");
            cov.args([
                "llvm-cov",
                "--workspace",
                "--exclude",
                "xtask",
                "--html",
            ]);
            run(
                "cargo llvm-cov --workspace --exclude xtask --html",
                &mut cov,
            )?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        Some(Commands::SiteCheck { path, assets, dump }) => {
            site_check(path.as_deref(), &assets, dump)?;
        }
        None => print_help(),
    }

    Ok(())
}

fn print_help() {
    eprintln!(
        r#"xtask - 开发辅助工具

USAGE:
  cargo xtask <command>

COMMANDS:
  check-all       运行 fmt、clippy、test 门禁检查
  cov-runtime     运行 folio-runtime 覆盖率报告
  cov-workspace   运行 workspace 覆盖率报告
  site-check      检查站点内容文件

SITE-CHECK:
  cargo xtask site-check [path] [--assets <dir>] [--dump]

  不带参数：检查 content/ 下所有 .json 文件
  带路径参数：检查指定文件或目录

  检查内容：
    - JSON 格式与必填字段
    - 链接、动效参数是否合法
    - 头像、项目封面、简历文件是否存在

ALIASES (in .cargo/config.toml):
  cargo check-all     -> cargo xtask check-all
  cargo cov-runtime   -> cargo xtask cov-runtime
  cargo cov-workspace -> cargo xtask cov-workspace
  cargo site-check    -> cargo xtask site-check
"#
    );
}

//=============================================================================
// site-check 命令实现
//=============================================================================

/// 内容检查结果
#[derive(Default)]
struct SiteCheckResult {
    files_checked: usize,
    errors: usize,
    missing_assets: Vec<MissingAsset>,
}

struct MissingAsset {
    file: String,
    field: &'static str,
    path: String,
}

fn site_check(path: Option<&Path>, assets: &Path, dump: bool) -> anyhow::Result<()> {
    let root = path.unwrap_or(Path::new("content"));
    if !root.exists() {
        anyhow::bail!(
            "路径不存在: {}\n请在 workspace 根目录运行，或指定内容路径",
            root.display()
        );
    }

    let files = collect_content_files(root);
    if files.is_empty() {
        eprintln!("未找到内容文件（.json）");
        return Ok(());
    }

    eprintln!("==> 检查 {} 个内容文件...\n", files.len());

    let mut result = SiteCheckResult::default();
    for file in &files {
        check_content_file(file, assets, dump, &mut result);
    }

    print_check_result(&result);

    if result.errors > 0 {
        anyhow::bail!("内容检查发现错误");
    }
    Ok(())
}

/// 收集 `.json` 文件（单个文件直接返回）
fn collect_content_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

fn check_content_file(file: &Path, assets: &Path, dump: bool, result: &mut SiteCheckResult) {
    let file_id = file.display().to_string();
    result.files_checked += 1;

    let content = match std::fs::read_to_string(file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[ERROR] {file_id}: 无法读取文件 - {e}");
            result.errors += 1;
            return;
        }
    };

    let site = match SiteConfig::from_json(&content) {
        Ok(site) => site,
        Err(e) => {
            eprintln!("[ERROR] {file_id}: {e}");
            result.errors += 1;
            return;
        }
    };

    if let Err(e) = site.validate() {
        eprintln!("[ERROR] {file_id}: {e}");
        result.errors += 1;
    }

    for (field, path) in referenced_assets(&site) {
        if !assets.join(&path).exists() {
            result.missing_assets.push(MissingAsset {
                file: file_id.clone(),
                field,
                path,
            });
        }
    }

    if dump {
        match serde_json::to_string_pretty(&site) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("[WARN] {file_id}: 无法输出配置 - {e}"),
        }
    }
}

/// 配置中引用的本地资源（外链跳过）
fn referenced_assets(site: &SiteConfig) -> Vec<(&'static str, String)> {
    let mut refs = vec![("portrait", site.portrait.clone())];
    refs.extend(
        site.projects
            .iter()
            .filter(|p| !p.image.is_empty())
            .map(|p| ("projects.image", p.image.clone())),
    );
    refs.extend(site.resume_url.iter().map(|url| ("resume_url", url.clone())));
    refs.retain(|(_, path)| !path.contains("://"));
    refs
}

fn print_check_result(result: &SiteCheckResult) {
    eprintln!("─────────────────────────────────────────────────────");
    eprintln!("检查完成: {} 个文件", result.files_checked);
    eprintln!();

    for missing in &result.missing_assets {
        eprintln!(
            "[WARN] {}: 资源不存在 [{}] {}",
            missing.file, missing.field, missing.path
        );
    }

    let warn_count = result.missing_assets.len();
    eprintln!();
    if result.errors > 0 {
        eprintln!("❌ {} 个错误, {} 个警告", result.errors, warn_count);
    } else if warn_count > 0 {
        eprintln!("⚠️  0 个错误, {} 个警告", warn_count);
    } else {
        eprintln!("✅ 检查通过，无错误");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referenced_assets_skip_remote() {
        let site = SiteConfig::from_json(
            r#"{
                "name": "Ada Lovelace",
                "role": "Analyst",
                "portrait": "images/ada.jpg",
                "projects": [
                    { "title": "A", "description": "a", "image": "images/a.jpg" },
                    { "title": "B", "description": "b", "image": "https://cdn.example.com/b.jpg" },
                    { "title": "C", "description": "c" }
                ],
                "resume_url": "files/cv.pdf"
            }"#,
        )
        .unwrap();

        let refs = referenced_assets(&site);
        assert_eq!(
            refs,
            [
                ("portrait", "images/ada.jpg".to_string()),
                ("projects.image", "images/a.jpg".to_string()),
                ("resume_url", "files/cv.pdf".to_string()),
            ]
        );
    }
}
