//! Test fixtures: sample build reports and temporary projects

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Route table printed by `next build` for a seven-route app
#[allow(dead_code)]
pub const SAMPLE_REPORT: &str = "\
   ▲ Next.js 14.2.3

   Creating an optimized production build ...
 ✓ Compiled successfully
 ✓ Generating static pages (12/12)

Route (app)                              Size     First Load JS
┌ ○ /_not-found                          880 B          89.6 kB
├ ● /[locale]                            2.88 kB         897 kB
├   ├ /en
├   └ /tr
├ ● /[locale]/auth/callback              6.41 kB         131 kB
├ ● /[locale]/dashboard                  43.4 kB        1.18 MB
├ ƒ /[locale]/ai/[programId]             13.4 kB         165 kB
├ ● /[locale]/login                      9.74 kB         185 kB
└ ● /[locale]/sso                        428 B          94.8 kB
+ First Load JS shared by all            88.7 kB
  ├ chunks/23-0627c91053ca9399.js        31.5 kB
  └ other shared chunks (total)          1.95 kB

○  (Static)   prerendered as static content
●  (SSG)      prerendered as static HTML (uses getStaticProps)
ƒ  (Dynamic)  server-rendered on demand
";

/// Paths of [`SAMPLE_REPORT`] in report order
#[allow(dead_code)]
pub const SAMPLE_PATHS: [&str; 7] = [
    "/_not-found",
    "/[locale]",
    "/[locale]/auth/callback",
    "/[locale]/dashboard",
    "/[locale]/ai/[programId]",
    "/[locale]/login",
    "/[locale]/sso",
];

/// Same app after moving the dashboard charts behind a dynamic import
#[allow(dead_code)]
pub const OPTIMIZED_REPORT: &str = "\
Route (app)                              Size     First Load JS
┌ ○ /_not-found                          880 B          89.6 kB
├ ● /[locale]                            2.88 kB         897 kB
├ ● /[locale]/auth/callback              6.41 kB         131 kB
├ ● /[locale]/dashboard                  12.1 kB         412 kB
├ ƒ /[locale]/ai/[programId]             13.4 kB         165 kB
├ ● /[locale]/login                      9.74 kB         185 kB
└ ● /[locale]/settings                   3.2 kB          96 kB
";

/// Temporary project directory containing `build.txt`
#[allow(dead_code)]
pub fn project_with_report(report: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;
    let report_path = temp_dir.path().join("build.txt");
    fs::write(&report_path, report)?;
    Ok((temp_dir, report_path))
}

/// Write a `.next-build-parser.toml` into `dir`
#[allow(dead_code)]
pub fn write_config(dir: &TempDir, contents: &str) -> anyhow::Result<PathBuf> {
    let path = dir.path().join(".next-build-parser.toml");
    fs::write(&path, contents)?;
    Ok(path)
}
