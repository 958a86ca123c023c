//! molfit command-line entry point
//!
//! Aligns the first coordinate file onto the second with the Kabsch
//! algorithm and prints the minimized RMSD:
//!
//! ```bash
//! molfit mol1.xyz mol2.xyz
//! molfit mol1.xyz mol2.xyz --raw-rmsd --rotation
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;

use molfit_algos::{kabsch, KabschParams, KabschResult};
use molfit_io::read_xyz;

#[derive(Parser, Debug)]
#[command(name = "molfit")]
#[command(about = "Optimal rigid-rotation alignment of two paired coordinate sets")]
#[command(version)]
struct Cli {
    /// First molecule .xyz file (the set that gets rotated)
    mol1: PathBuf,

    /// Second molecule .xyz file (the reference set)
    mol2: PathBuf,

    /// Also report the RMSD of the sets as given, before rotation
    #[arg(long)]
    raw_rmsd: bool,

    /// Also print the optimal rotation matrix
    #[arg(long)]
    rotation: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let mol1 = read_xyz(&cli.mol1)
        .with_context(|| format!("failed to read {}", cli.mol1.display()))?;
    let mol2 = read_xyz(&cli.mol2)
        .with_context(|| format!("failed to read {}", cli.mol2.display()))?;

    if mol1.len() != mol2.len() {
        bail!(
            "atom counts differ: {} has {}, {} has {}",
            cli.mol1.display(),
            mol1.len(),
            cli.mol2.display(),
            mol2.len()
        );
    }
    log::debug!("aligning {} atom pairs", mol1.len());

    let params = KabschParams {
        raw_rmsd: cli.raw_rmsd,
        rotation: cli.rotation,
    };
    let result = kabsch(&mol1.coords, &mol2.coords, &params)?;

    Ok(format_report(&result))
}

fn format_report(result: &KabschResult) -> String {
    let mut out = format!("RMSD after optimal rotation: {:.6}\n", result.rmsd);
    if let Some(raw) = result.raw_rmsd {
        out.push_str(&format!("RMSD as given:               {:.6}\n", raw));
    }
    if let Some(u) = &result.rotation {
        out.push_str("Rotation matrix:\n");
        for row in 0..3 {
            out.push_str(&format!(
                "  {:>12.8} {:>12.8} {:>12.8}\n",
                u.data[3 * row],
                u.data[3 * row + 1],
                u.data[3 * row + 2]
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_xyz(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    fn cli(mol1: PathBuf, mol2: PathBuf, raw_rmsd: bool, rotation: bool) -> Cli {
        Cli {
            mol1,
            mol2,
            raw_rmsd,
            rotation,
        }
    }

    const MOL_A: &str = "3\nwater a\nO     0.000    0.000    0.000\nH     0.957    0.000    0.000\nH    -0.240    0.927    0.000\n";
    const MOL_B: &str = "3\nwater b\nO     0.012   -0.008    0.004\nH     0.949    0.011   -0.006\nH    -0.229    0.918    0.009\n";

    #[test]
    fn test_full_report() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_xyz(dir.path(), "a.xyz", MOL_A);
        let b = write_xyz(dir.path(), "b.xyz", MOL_B);

        let report = run(&cli(a, b, true, true)).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert!(lines[0].starts_with("RMSD after optimal rotation:"));
        assert!(lines[1].starts_with("RMSD as given:"));
        assert_eq!(lines[2], "Rotation matrix:");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_minimal_report() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_xyz(dir.path(), "a.xyz", MOL_A);
        let b = write_xyz(dir.path(), "b.xyz", MOL_B);

        let report = run(&cli(a, b, false, false)).unwrap();
        assert_eq!(report.lines().count(), 1);
        assert!(report.starts_with("RMSD after optimal rotation:"));
    }

    #[test]
    fn test_identical_files_align_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_xyz(dir.path(), "a.xyz", MOL_A);
        let b = write_xyz(dir.path(), "b.xyz", MOL_A);

        let report = run(&cli(a, b, false, false)).unwrap();
        assert!(report.contains("0.000000"));
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_xyz(dir.path(), "a.xyz", MOL_A);
        let missing = dir.path().join("nope.xyz");

        let err = run(&cli(a, missing, false, false)).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_atom_count_mismatch_fails() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_xyz(dir.path(), "a.xyz", MOL_A);
        let b = write_xyz(dir.path(), "b.xyz", "1\nlone atom\nO 0.0 0.0 0.0\n");

        let err = run(&cli(a, b, false, false)).unwrap_err();
        assert!(err.to_string().contains("atom counts differ"));
    }

    #[test]
    fn test_report_formatting() {
        use lin_alg::f64::Mat3;

        let result = KabschResult {
            rmsd: 0.029961,
            raw_rmsd: Some(0.125),
            rotation: Some(Mat3 {
                data: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            }),
            n_points: 3,
        };
        let report = format_report(&result);
        assert!(report.contains("0.029961"));
        assert!(report.contains("0.125000"));
        assert!(report.contains("1.00000000"));
    }
}
