use std::env;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use graphscope::export::{self, ExportData, ExportFormat, GraphvizRenderer};
use graphscope::graph::{format_vertex_list, Degree, Graph, Neighbors, Vertex};
use graphscope::parser;
use graphscope::ui::{run_app, App, KeyPause, NoPause};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "graphscope")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version = "0.1.0")]
#[command(about = "Edge-list graph explorer with circular dependency checks", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Graph file to explore in the interactive menu (prompted for if omitted)
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether two vertices are adjacent
    Adjacent {
        /// Graph file
        file: PathBuf,
        /// First vertex
        v1: String,
        /// Second vertex
        v2: String,
    },
    /// Show the degree of a vertex
    Degree {
        /// Graph file
        file: PathBuf,
        /// Vertex to inspect
        vertex: String,
    },
    /// List the neighbors of a vertex
    Neighbors {
        /// Graph file
        file: PathBuf,
        /// Vertex to inspect
        vertex: String,
    },
    /// List all edges
    Edges {
        /// Graph file
        file: PathBuf,
    },
    /// Check a directed graph for circular dependencies (exit code 1 if found)
    Check {
        /// Graph file
        file: PathBuf,
    },
    /// Export the graph as dot, json, csv or markdown
    Export {
        /// Graph file
        file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "dot")]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render the graph to an image with Graphviz
    Render {
        /// Graph file
        file: PathBuf,

        /// Output file stem; the format is appended as extension
        #[arg(short, long, default_value = GraphvizRenderer::DEFAULT_STEM)]
        output: PathBuf,

        /// Image format understood by `dot -T`
        #[arg(short, long, default_value = GraphvizRenderer::DEFAULT_FORMAT)]
        format: String,
    },
    /// Show version information
    Version,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Adjacent { file, v1, v2 }) => {
            let graph = load(&file)?;
            let verdict = if graph.is_adjacent(&v1, &v2) {
                "are adjacent"
            } else {
                "are not adjacent"
            };
            println!("Vertices {} and {} {}.", Vertex::new(&v1), Vertex::new(&v2), verdict);
        }
        Some(Commands::Degree { file, vertex }) => {
            let graph = load(&file)?;
            let name = Vertex::new(&vertex);
            match graph.degree(&vertex) {
                Some(Degree::Directed {
                    out_degree,
                    in_degree,
                }) => println!("Degree of {} - out: {}, in: {}", name, out_degree, in_degree),
                Some(Degree::Undirected(n)) => println!("Degree of {}: {}", name, n),
                None => {
                    println!("Vertex {} not found.", name);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Some(Commands::Neighbors { file, vertex }) => {
            let graph = load(&file)?;
            let name = Vertex::new(&vertex);
            match graph.neighbors(&vertex) {
                Some(Neighbors::Directed {
                    successors,
                    predecessors,
                }) => {
                    println!("Successors of {}: {}", name, format_vertex_list(&successors));
                    println!("Predecessors of {}: {}", name, format_vertex_list(&predecessors));
                }
                Some(Neighbors::Undirected(list)) => {
                    println!("Neighbors of {}: {}", name, format_vertex_list(&list))
                }
                None => {
                    println!("Vertex {} not found.", name);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Some(Commands::Edges { file }) => {
            let graph = load(&file)?;
            for (from, to) in graph.edges() {
                println!("({}, {})", from, to);
            }
        }
        Some(Commands::Check { file }) => {
            let graph = load(&file)?;
            match graph.dependency_report() {
                None => println!("⚠️  Dependency checks apply to directed graphs only."),
                Some(report) if report.is_valid() => {
                    println!("✅ No circular dependencies found.");
                }
                Some(report) => {
                    println!("❌ Circular dependency: {}", report.cycle_path());
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Some(Commands::Export {
            file,
            format,
            output,
        }) => {
            let graph = load(&file)?;
            let data = ExportData::new(source_name(&file), &graph);
            match output {
                Some(path) => {
                    let out = File::create(&path)
                        .with_context(|| format!("Failed to create '{}'", path.display()))?;
                    let mut writer = BufWriter::new(out);
                    export::export(format, &data, &mut writer)?;
                    writer.flush()?;
                    info!(format = %format, path = %path.display(), "export written");
                }
                None => {
                    let stdout = io::stdout();
                    export::export(format, &data, &mut stdout.lock())?;
                }
            }
        }
        Some(Commands::Render {
            file,
            output,
            format,
        }) => {
            let graph = load(&file)?;
            let data = ExportData::new(source_name(&file), &graph);
            let path = GraphvizRenderer::new().render(&data, &output, &format)?;
            println!("✓ Image saved as '{}'", path.display());
        }
        Some(Commands::Version) => {
            println!("graphscope v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            let file = match cli.file {
                Some(file) => file,
                None => prompt_for_file()?,
            };
            run_interactive(&file)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("GRAPHSCOPE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "graphscope=debug,info"
        } else {
            "graphscope=warn"
        })
    });

    let format = env::var("GRAPHSCOPE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

fn load(path: &Path) -> anyhow::Result<Graph> {
    parser::parse_file(path).context("Could not load graph")
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn prompt_for_file() -> anyhow::Result<PathBuf> {
    print!("Enter the graph .txt file name: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read file name")?;
    Ok(PathBuf::from(line.trim()))
}

fn run_interactive(file: &Path) -> anyhow::Result<()> {
    println!();
    println!("GraphScope - graph queries and circular dependency detection");
    println!();

    let graph = load(file)?;
    let mut app = App::new(graph, source_name(file));

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    if interactive {
        run_app(&mut app, &mut input, &mut output, &mut KeyPause::default())?;
    } else {
        run_app(&mut app, &mut input, &mut output, &mut NoPause)?;
    }

    Ok(())
}
