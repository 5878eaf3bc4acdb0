use terminal_size::{terminal_size, Width};

use crate::api::OptionConfig;
use crate::constant::*;
use crate::parser::{ConsoleInterface, LineBreaker, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The placement of one help block.
///
/// An indent of `0` on an options block means: line descriptions up two columns past the widest option title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Layout {
    indent: usize,
    left_margin: usize,
    right_margin: usize,
}

impl Layout {
    /// The default layout: automatic indent, no margins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent continuation lines (and, for options, descriptions) by `indent` columns.
    ///
    /// In an options block, a description stays on its title line only when `indent` exceeds the title width plus two.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Leave `left_margin` columns free on the left of every line.
    pub fn left_margin(mut self, left_margin: usize) -> Self {
        self.left_margin = left_margin;
        self
    }

    /// Leave `right_margin` columns free on the right of every line.
    pub fn right_margin(mut self, right_margin: usize) -> Self {
        self.right_margin = right_margin;
        self
    }
}

#[derive(Debug)]
struct Body {
    first_line_indent: usize,
    text: String,
}

#[derive(Debug)]
struct Block {
    indent: usize,
    left_margin: usize,
    right_margin: usize,
    bodies: Vec<Body>,
}

/// A help document: text and option blocks, wrapped to a terminal width.
///
/// ### Example
/// ```
/// # use argvise_core as argvise;
/// use argvise::{Help, Layout, OptionConfig};
///
/// let configs = vec![
///     OptionConfig::new(["foo-bar", "f"]).takes_argument().help_label("<text>").description("D1"),
///     OptionConfig::new(["baz", "b"]).description("D2"),
/// ];
/// let help = Help::new(80)
///     .add_text("usage: app [options]", Layout::new())
///     .add_options(&configs, Layout::new().left_margin(1));
///
/// assert_eq!(
///     help.lines().collect::<Vec<_>>(),
///     vec![
///         "usage: app [options]",
///         " --foo-bar, -f <text>  D1",
///         " --baz, -b             D2",
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct Help {
    width: usize,
    blocks: Vec<Block>,
}

impl Help {
    /// Create a help document for a terminal `width` columns wide.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            blocks: Vec::default(),
        }
    }

    /// Create a help document for the current terminal (80 columns when its width is unknown).
    pub fn terminal() -> Self {
        let width = if let Some((Width(terminal_width), _)) = terminal_size() {
            terminal_width as usize
        } else {
            DEFAULT_TERMINAL_WIDTH
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Help width: {width}.");
        }

        Self::new(width)
    }

    /// The terminal width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Add a paragraph of text.
    pub fn add_text(mut self, text: impl Into<String>, layout: Layout) -> Self {
        self.blocks.push(Block {
            indent: layout.indent,
            left_margin: layout.left_margin,
            right_margin: layout.right_margin,
            bodies: vec![Body {
                first_line_indent: 0,
                text: text.into(),
            }],
        });
        self
    }

    /// Add an entry per option: its names, argument label, and description.
    /// The wildcard configuration, and configurations with neither names nor store key, are left out.
    pub fn add_options(mut self, configs: &[OptionConfig<'_>], layout: Layout) -> Self {
        let entries: Vec<(Title, Option<&str>)> = configs
            .iter()
            .filter_map(|config| Title::of(config).map(|title| (title, config.help_description())))
            .collect();

        let explicit = layout.indent != 0;
        let indent = if explicit {
            layout.indent
        } else {
            entries
                .iter()
                .map(|(title, _)| title.width())
                .max()
                .map_or(0, |widest| widest + DESCRIPTION_GAP)
        };

        let bodies = entries
            .into_iter()
            .map(|(title, description)| title.into_body(description, indent, explicit))
            .collect();

        self.blocks.push(Block {
            indent,
            left_margin: layout.left_margin,
            right_margin: layout.right_margin,
            bodies,
        });
        self
    }

    /// The rendered lines, computed lazily.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            help: self,
            block: 0,
            body: 0,
            current: None,
        }
    }

    /// Print every line to standard output.
    pub fn print(&self) {
        self.print_with(&ConsoleInterface::default());
    }

    pub(crate) fn print_with(&self, user_interface: &dyn UserInterface) {
        for line in self.lines() {
            user_interface.print(line);
        }
    }
}

/// An option title, such as `--foo-bar, -f <text>`, with the placeholder columns that precede it.
#[derive(Debug, PartialEq, Eq)]
struct Title {
    leading: usize,
    text: String,
}

impl Title {
    fn of(config: &OptionConfig<'_>) -> Option<Self> {
        if config.is_wildcard() {
            return None;
        }

        let mut leading = 0;
        let mut text = String::default();
        let mut after_name = false;
        let count = config.names().len();

        for (index, name) in config.names().iter().enumerate() {
            if name.is_empty() {
                let placeholder = if index + 1 == count {
                    TRAILING_PLACEHOLDER_WIDTH
                } else {
                    PLACEHOLDER_WIDTH
                };

                if text.is_empty() {
                    leading += placeholder;
                } else {
                    text.push_str(&" ".repeat(placeholder));
                }

                after_name = false;
            } else {
                if after_name {
                    text.push_str(NAME_SEPARATOR);
                }

                text.push_str(&flag(name));
                after_name = true;
            }
        }

        if text.is_empty() {
            let store_key = config.effective_store_key();

            if store_key.is_empty() {
                return None;
            }

            text.push_str(&flag(store_key));
        }

        if let Some(label) = config.argument_label() {
            text.push(' ');
            text.push_str(label);
        }

        Some(Self { leading, text })
    }

    fn width(&self) -> usize {
        self.leading + self.text.chars().count()
    }

    fn into_body(self, description: Option<&str>, indent: usize, explicit: bool) -> Body {
        let width = self.width();
        // The automatic indent is exactly the widest title plus the gap.
        let fits = if explicit {
            indent > width + DESCRIPTION_GAP
        } else {
            indent >= width + DESCRIPTION_GAP
        };
        let text = match description {
            None | Some("") => self.text,
            Some(description) if fits => {
                let padding = " ".repeat(indent - width);
                format!("{}{padding}{description}", self.text)
            }
            Some(description) => format!("{}\n{description}", self.text),
        };

        Body {
            first_line_indent: self.leading,
            text,
        }
    }
}

fn flag(name: &str) -> String {
    if name.chars().count() == 1 {
        format!("{SHORT_PREFIX}{name}")
    } else {
        format!("{LONG_PREFIX}{name}")
    }
}

/// The lines of a [`Help`] document.
pub struct Lines<'h> {
    help: &'h Help,
    block: usize,
    body: usize,
    current: Option<LineBreaker<'h>>,
}

impl<'h> Iterator for Lines<'h> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let block = self.help.blocks.get(self.block)?;

            if let Some(breaker) = self.current.as_mut() {
                if let Some(line) = breaker.next() {
                    breaker.set_indent(" ".repeat(block.indent));

                    if line.is_empty() {
                        return Some(line);
                    }

                    return Some(format!("{}{line}", " ".repeat(block.left_margin)));
                }

                self.current = None;
                self.body += 1;
            }

            let print_width = self
                .help
                .width
                .saturating_sub(block.left_margin + block.right_margin);

            if print_width <= block.indent || self.body >= block.bodies.len() {
                #[cfg(feature = "tracing_debug")]
                {
                    if print_width <= block.indent {
                        debug!(
                            "Skipping help block {}: print width {print_width} does not exceed indent {}.",
                            self.block, block.indent
                        );
                    }
                }

                self.block += 1;
                self.body = 0;
                continue;
            }

            let body = &block.bodies[self.body];
            let mut breaker = LineBreaker::new(&body.text, print_width);
            breaker.set_indent(" ".repeat(body.first_line_indent));
            self.current.replace(breaker);
        }
    }
}
