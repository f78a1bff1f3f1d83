use std::process;

use clinch::graph::InteractionGraph;

fn main() {
    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("usage: extract <interactions> [output]");
        process::exit(2);
    };
    let output = args.next().unwrap_or_else(|| String::from("clique_list.txt"));

    if let Err(error) = run(&input, &output) {
        eprintln!("extract: {}", error);
        process::exit(1);
    }
}

fn run(input: &str, output: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut graph = InteractionGraph::read_records(input)?;
    let reduction = graph.reduce_to_clique();

    println!(
        "clique of {}: {}",
        reduction.clique.len(),
        reduction.clique.join(" ")
    );

    // Render in memory so a failed run leaves no partial file behind.
    let mut buffer = Vec::new();
    graph.write_members(&mut buffer)?;
    std::fs::write(output, buffer)?;

    Ok(())
}
