use anyhow::{bail, Context};
use structopt::StructOpt;

use std::{io::BufRead, path::PathBuf};

use plotters::prelude::*;

#[derive(StructOpt)]
pub struct GraphOptions {
    /// Batch output file to characterise, one value per line.
    #[structopt(name = "FILE", parse(from_os_str))]
    input: PathBuf,
    /// Where to save the histogram. Defaults to the input path with a
    /// .png extension.
    #[structopt(short, long)]
    output: Option<PathBuf>,
}

const BINS: usize = 100;

const BAR_COLOUR: RGBColor = RGBColor(31, 119, 180);

const X_LABEL_AREA_SIZE: i32 = 50;
const Y_LABEL_AREA_SIZE: i32 = 70;

const TITLE_FONT_SIZE: i32 = 40;

const FONT: &str = "sans-serif";

const MARGIN: i32 = 20;

const IMG_DIMS: (u32, u32) = (1280, 720);

impl GraphOptions {
    pub fn run(&self) -> anyhow::Result<()> {
        let input_string = self.input.to_string_lossy();
        let file = std::fs::File::open(&self.input)
            .with_context(|| format!("Failed to open batch file {input_string}."))?;
        if file.metadata().with_context(|| format!("Failed to get file metadata of {input_string}."))?.is_dir() {
            bail!("Cannot read a directory as a batch file!\n    Problematic file: {input_string}");
        }

        let reader = std::io::BufReader::new(file);
        let values = reader
            .lines()
            .enumerate()
            .map(|(line_no, res)| {
                let line = res?;
                line.trim()
                    .parse()
                    .with_context(|| format!("Failed to parse line {} of {input_string} as f64.", line_no + 1))
            })
            .collect::<anyhow::Result<Vec<f64>>>()?;

        if values.is_empty() {
            bail!("{input_string} contains no values.");
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        // A single repeated value still gets a visible bar.
        let span = if max > min { max - min } else { 1.0 };

        let mut counts = [0u32; BINS];
        for &value in &values {
            let bin = (((value - min) / span) * BINS as f64) as usize;
            counts[bin.min(BINS - 1)] += 1;
        }

        let tallest = counts.iter().copied().max().unwrap_or(1);

        let output = self.output.clone().unwrap_or_else(|| self.input.with_extension("png"));

        let root = BitMapBackend::new(&output, IMG_DIMS).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(format!("Distribution of {input_string}"), (FONT, TITLE_FONT_SIZE))
            .margin(MARGIN)
            .x_label_area_size(X_LABEL_AREA_SIZE)
            .y_label_area_size(Y_LABEL_AREA_SIZE)
            .build_cartesian_2d(min..min + span, 0u32..tallest + tallest / 10 + 1)?;

        chart.configure_mesh().x_desc("Value").y_desc("Frequency").draw()?;

        let bin_width = span / BINS as f64;
        chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
            let x0 = min + i as f64 * bin_width;
            Rectangle::new([(x0, 0), (x0 + bin_width, count)], BAR_COLOUR.filled())
        }))?;

        root.present()?;

        println!("Minimum Value: {min} Maximum Value: {max}");
        println!("Histogram saved to {}", output.display());

        Ok(())
    }
}
