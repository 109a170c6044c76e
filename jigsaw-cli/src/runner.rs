//! Drives one generation run and formats its results.
//!
//! [`Runner`] owns the configuration, builds the random source from it and
//! hands the finished grid to the output helpers: a piece-size table on
//! stdout and an optional JSON dump for external renderers.

use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::Path,
};

use anyhow::Context;
use jigsaw_core::{
    boundary::{self, QuarterArc},
    config::JigsawConfig,
    grid::{Border, CellSnapshot, Grid},
    growth::RunOutcome,
    pipeline::{self, GenerationReport},
    types::FILLER_PIECE,
};
use serde::Serialize;
use tracing::{info, warn};

/// Owns the parameters of a generation run.
pub struct Runner {
    cfg: JigsawConfig,
}

/// Everything a renderer needs to draw the finished puzzle.
#[derive(Serialize)]
struct Export<'a> {
    config: &'a JigsawConfig,
    border: Border,
    side: usize,
    num_pieces: u32,
    filler_piece: u32,
    cells: Vec<CellSnapshot>,
    arcs: Vec<QuarterArc>,
}

impl Runner {
    pub fn new(cfg: JigsawConfig) -> Self {
        Self { cfg }
    }

    /// Runs seeding, growth and completion.
    ///
    /// Seed exhaustion and non-convergence are logged as warnings; the
    /// completed grid is returned either way.
    pub fn run(&self) -> anyhow::Result<GenerationReport> {
        let mut rng = self.cfg.rng();
        let report = pipeline::generate(&self.cfg, &mut rng).context("invalid parameters")?;

        if let Some(err) = &report.seed_error {
            warn!("{err}; try fewer pieces or a smaller --min-dist");
        }
        match report.growth {
            RunOutcome::Converged { steps } => info!(steps, "converged"),
            RunOutcome::NotConverged {
                steps,
                remaining_active,
            } => warn!(
                steps,
                remaining_active, "did not converge; try a larger --max-steps"
            ),
        }
        Ok(report)
    }

    /// Writes cells and boundary arcs of `report` as JSON to `path`.
    pub fn export_json(
        &self,
        report: &GenerationReport,
        scale: f32,
        path: &Path,
    ) -> anyhow::Result<()> {
        let export = Export {
            config: &self.cfg,
            border: report.grid.border(),
            side: report.grid.side(),
            num_pieces: report.grid.num_pieces(),
            filler_piece: FILLER_PIECE,
            cells: report.grid.snapshot(),
            arcs: boundary::arcs(&report.grid, scale),
        };
        let file =
            File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &export)
            .with_context(|| format!("writing {}", path.display()))?;
        writer.flush()?;
        info!(path = %path.display(), arcs = export.arcs.len(), "exported");
        Ok(())
    }
}

/// Piece sizes, one row per piece in ascending id order.
pub fn size_table(grid: &Grid) -> String {
    let rows = grid.count().into_iter().map(|(piece, size)| {
        if piece == FILLER_PIECE {
            format!("{:>9} {size:6}\n", "filler")
        } else {
            format!("{piece:9} {size:6}\n")
        }
    });
    std::iter::once(String::from("    Piece   Size\n"))
        .chain(rows)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;
    use jigsaw_core::seeder::place_seed;

    #[test]
    fn size_table_lists_pieces_in_id_order() {
        let mut grid = Grid::new(4, Border::Rectangular);
        place_seed(&mut grid, IVec2::new(1, 1), 2).unwrap();
        place_seed(&mut grid, IVec2::new(3, 3), 1).unwrap();

        let table = size_table(&grid);
        assert_eq!(
            table,
            "    Piece   Size\n        1      1\n        2      1\n"
        );
    }

    #[test]
    fn filler_row_is_labelled() {
        let mut grid = Grid::new(2, Border::Rectangular);
        let mut rng = JigsawConfig::default().rng();
        jigsaw_core::completer::complete(&mut grid, 1000, &mut rng);

        let table = size_table(&grid);
        assert!(table.ends_with("   filler      4\n"), "{table}");
    }

    #[test]
    fn export_writes_cells_and_arcs() {
        let mut cfg = JigsawConfig::default();
        cfg.resolution = 6;
        cfg.seeding.num_pieces = 2;
        cfg.rng_seed = Some(3);
        let runner = Runner::new(cfg);
        let report = runner.run().unwrap();

        let path = std::env::temp_dir().join(format!("jigsaw-export-{}.json", std::process::id()));
        runner.export_json(&report, 10.0, &path).unwrap();

        let json: serde_json::Value =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(json["side"], 8);
        assert_eq!(json["border"], "rectangular");
        assert_eq!(json["cells"].as_array().unwrap().len(), 64);
        assert!(!json["arcs"].as_array().unwrap().is_empty());
        assert_eq!(json["filler_piece"], u64::from(FILLER_PIECE));
    }
}
