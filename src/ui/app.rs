//! Application state and menu loop
//!
//! Runs the numbered text menu over a loaded graph. Input and output are
//! generic so the whole session can be driven from memory in tests.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

use super::pause::Pause;
use crate::export::{ExportData, GraphvizRenderer};
use crate::graph::{format_vertex_list, Degree, Graph, Neighbors, Vertex};

const RULE_WIDTH: usize = 60;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1 - test whether two vertices are adjacent
    Adjacency,
    /// 2 - degree of a vertex
    Degree,
    /// 3 - neighbors of a vertex
    Neighbors,
    /// 4 - list all edges
    Edges,
    /// 5 - render the graph to an image
    ExportImage,
    /// 6 - check for circular dependencies
    DependencyCheck,
    /// 7 - leave the menu
    Quit,
}

impl MenuChoice {
    /// All entries in menu order.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Adjacency,
        MenuChoice::Degree,
        MenuChoice::Neighbors,
        MenuChoice::Edges,
        MenuChoice::ExportImage,
        MenuChoice::DependencyCheck,
        MenuChoice::Quit,
    ];

    /// Parses the user's selection, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Adjacency),
            "2" => Some(Self::Degree),
            "3" => Some(Self::Neighbors),
            "4" => Some(Self::Edges),
            "5" => Some(Self::ExportImage),
            "6" => Some(Self::DependencyCheck),
            "7" => Some(Self::Quit),
            _ => None,
        }
    }

    /// Menu label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Adjacency => "Check adjacency",
            Self::Degree => "Vertex degree",
            Self::Neighbors => "List neighbors of a vertex",
            Self::Edges => "List edges",
            Self::ExportImage => "Export graph as image",
            Self::DependencyCheck => "Check circular dependencies",
            Self::Quit => "Quit",
        }
    }

    /// Number the user types to select this entry.
    pub fn key(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .map_or(0, |i| i + 1)
    }

    /// Whether the session waits for a key press after this action.
    fn pauses_after(&self) -> bool {
        !matches!(self, Self::ExportImage | Self::Quit)
    }
}

/// Application state
pub struct App {
    /// The loaded graph
    pub graph: Graph,
    /// Name of the input, used in export titles
    pub source_name: String,
    /// Image file stem for menu option 5
    pub image_stem: PathBuf,
    /// Image format for menu option 5
    pub image_format: String,
    /// Renderer used for image export
    renderer: GraphvizRenderer,
    /// Whether the session should end
    pub should_quit: bool,
}

impl App {
    /// Create a new application over a loaded graph
    pub fn new(graph: Graph, source_name: impl Into<String>) -> Self {
        Self {
            graph,
            source_name: source_name.into(),
            image_stem: PathBuf::from(GraphvizRenderer::DEFAULT_STEM),
            image_format: GraphvizRenderer::DEFAULT_FORMAT.to_string(),
            renderer: GraphvizRenderer::new(),
            should_quit: false,
        }
    }

    /// Replace the image renderer
    pub fn with_renderer(mut self, renderer: GraphvizRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Set the image output stem and format
    pub fn with_image_output(
        mut self,
        stem: impl Into<PathBuf>,
        format: impl Into<String>,
    ) -> Self {
        self.image_stem = stem.into();
        self.image_format = format.into();
        self
    }

    /// Mark the session as finished
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Write the load summary shown when the session starts
    pub fn write_summary<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output, "Graph loaded: {} vertices", self.graph.vertex_count())?;
        writeln!(
            output,
            "Directed graph? {}",
            if self.graph.is_directed() { "Yes" } else { "No" }
        )?;
        writeln!(output)?;
        writeln!(output, "{}", "=".repeat(50))
    }

    /// Write the menu
    pub fn write_menu<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output)?;
        writeln!(output, "_______MENU_______")?;
        for choice in MenuChoice::ALL {
            writeln!(output, "{}-{}", choice.key(), choice.label())?;
        }
        writeln!(output)
    }

    /// Run one menu action, prompting for any vertex names it needs.
    ///
    /// Returns `Ok(false)` if input ran out while prompting.
    pub fn handle<R: BufRead, W: Write>(
        &mut self,
        choice: MenuChoice,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<bool> {
        debug!(?choice, "menu action");
        match choice {
            MenuChoice::Adjacency => {
                let Some(v1) = prompt(input, output, "Enter vertex 1: ")? else {
                    return Ok(false);
                };
                let Some(v2) = prompt(input, output, "Enter vertex 2: ")? else {
                    return Ok(false);
                };
                let (a, b) = (Vertex::new(&v1), Vertex::new(&v2));
                let verdict = if self.graph.is_adjacent(&v1, &v2) {
                    "are adjacent"
                } else {
                    "are not adjacent"
                };
                writeln!(output)?;
                writeln!(output, "Vertices {} and {} {}.", a, b, verdict)?;
            }
            MenuChoice::Degree => {
                let Some(name) = prompt(input, output, "Enter vertex: ")? else {
                    return Ok(false);
                };
                let vertex = Vertex::new(&name);
                match self.graph.degree(&name) {
                    Some(Degree::Directed {
                        out_degree,
                        in_degree,
                    }) => writeln!(
                        output,
                        "Degree of {} - out: {}, in: {}",
                        vertex, out_degree, in_degree
                    )?,
                    Some(Degree::Undirected(n)) => writeln!(output, "Degree of {}: {}", vertex, n)?,
                    None => writeln!(output, "Vertex {} not found.", vertex)?,
                }
                writeln!(output)?;
            }
            MenuChoice::Neighbors => {
                let Some(name) = prompt(input, output, "Enter vertex: ")? else {
                    return Ok(false);
                };
                let vertex = Vertex::new(&name);
                match self.graph.neighbors(&name) {
                    Some(Neighbors::Directed {
                        successors,
                        predecessors,
                    }) => {
                        writeln!(
                            output,
                            "Neighbors of {} - successors: {}",
                            vertex,
                            format_vertex_list(&successors)
                        )?;
                        writeln!(
                            output,
                            "Neighbors of {} - predecessors: {}",
                            vertex,
                            format_vertex_list(&predecessors)
                        )?;
                    }
                    Some(Neighbors::Undirected(list)) => writeln!(
                        output,
                        "Neighbors of {}: {}",
                        vertex,
                        format_vertex_list(&list)
                    )?,
                    None => writeln!(output, "Vertex {} not found.", vertex)?,
                }
                writeln!(output)?;
            }
            MenuChoice::Edges => {
                writeln!(output, "Edges of the graph:")?;
                for (from, to) in self.graph.edges() {
                    writeln!(output, "({}, {})", from, to)?;
                }
                writeln!(output)?;
            }
            MenuChoice::ExportImage => {
                writeln!(output, "5. GRAPH IMAGE EXPORT")?;
                let data = ExportData::new(self.source_name.as_str(), &self.graph);
                match self
                    .renderer
                    .render(&data, &self.image_stem, &self.image_format)
                {
                    Ok(path) => writeln!(output, "✓ Image saved as '{}'", path.display())?,
                    Err(e) => {
                        warn!(error = %e, "image export failed");
                        writeln!(output, "✗ Image export failed: {}", e)?;
                    }
                }
                writeln!(output)?;
            }
            MenuChoice::DependencyCheck => {
                writeln!(output, "6. CIRCULAR DEPENDENCY CHECK")?;
                self.write_dependency_check(output)?;
            }
            MenuChoice::Quit => {
                writeln!(output, "Exiting...")?;
                self.quit();
            }
        }
        Ok(true)
    }

    fn write_dependency_check<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let Some(report) = self.graph.dependency_report() else {
            return writeln!(
                output,
                "WARNING: the dependency check applies to directed graphs only."
            );
        };

        let rule = "=".repeat(RULE_WIDTH);
        writeln!(output)?;
        writeln!(output, "{}", rule)?;
        writeln!(output, "DEPENDENCY CHECK")?;
        writeln!(output, "{}", rule)?;

        if report.is_valid() {
            writeln!(output, "✅ VALID DEPENDENCY STRUCTURE!")?;
            writeln!(output, "No circular dependencies were found")?;
        } else {
            writeln!(output, "❌ CIRCULAR DEPENDENCY DETECTED!")?;
            writeln!(output, "🔁 Cycle found: {}", report.cycle_path())?;
            writeln!(output)?;
            writeln!(output, "Modules involved in the cycle:")?;
            for (from, to) in report.links() {
                writeln!(output, "  {} -> {}", from, to)?;
            }
        }

        writeln!(output, "{}", rule)
    }
}

/// Print `label` and read one trimmed line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the menu loop until the user quits or input ends.
pub fn run_app<R, W, P>(
    app: &mut App,
    input: &mut R,
    output: &mut W,
    pause: &mut P,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    P: Pause,
{
    app.write_summary(output)?;

    while !app.should_quit {
        app.write_menu(output)?;
        let Some(selection) = prompt(input, output, "Choose an option: ")? else {
            break;
        };

        match MenuChoice::parse(&selection) {
            Some(choice) => {
                if !app.handle(choice, input, output)? {
                    break;
                }
                if choice.pauses_after() {
                    pause.pause(output)?;
                }
            }
            None => {
                writeln!(output, "Invalid option, try again.")?;
                pause.pause(output)?;
            }
        }
    }

    Ok(())
}
