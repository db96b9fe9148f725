mod generate;
mod graph;

use structopt::StructOpt;

#[derive(StructOpt)]
pub enum Options {
    Generate(generate::GenerateOptions),
    Graph(graph::GraphOptions),
}

fn main() -> anyhow::Result<()> {
    match Options::from_args() {
        Options::Generate(options) => options.run(),
        Options::Graph(options) => options.run(),
    }
}
