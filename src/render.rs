// Text rendering of the dashboard and the new-task form

use crate::app::{App, Tab};
use crate::filter::Filter;
use crate::task::{Priority, Task};
use colored::{ColoredString, Colorize};
use std::fmt;

pub const EMPTY_MESSAGE: &str = "There are no tasks here... :(";
pub const INPUT_PLACEHOLDER: &str = "Is there something to do?";

const DATE_RGB: (u8, u8, u8) = (140, 140, 140);
const MUTED_RGB: (u8, u8, u8) = (177, 177, 177);
const DISABLED_RGB: (u8, u8, u8) = (100, 100, 100);
const ACCENT_RGB: (u8, u8, u8) = (150, 150, 215);
const CHECK_RGB: (u8, u8, u8) = (65, 167, 204);

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    pub date_format: String,
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "TodoC".to_string(),
            date_format: "%d/%m/%Y %H:%M".to_string(),
            color: true,
        }
    }
}

/// Render one frame for the current tab
pub fn render(app: &App, options: &RenderOptions) -> String {
    Frame { app, options }.to_string()
}

/// One screen of output, drawn through `Display`
pub struct Frame<'a> {
    pub app: &'a App,
    pub options: &'a RenderOptions,
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let painter = Painter {
            color: self.options.color,
        };

        match self.app.tab() {
            Tab::Dashboard => write_dashboard(f, self.app, self.options, &painter),
            Tab::NewTask => write_new_task(f, self.app, &painter),
        }
    }
}

fn write_dashboard(f: &mut fmt::Formatter<'_>, app: &App, options: &RenderOptions, painter: &Painter) -> fmt::Result {
    writeln!(f, "{}    {}", painter.bold(&options.title), painter.rgb("[New task]", ACCENT_RGB))?;
    writeln!(f)?;

    let tabs: Vec<String> = Filter::ALL
        .iter()
        .map(|&filter| {
            let caption = format!("{} ({})", filter.label(), app.store().count(filter));
            if filter == app.filter() {
                painter.selected(&format!("[{}]", caption))
            } else {
                format!(" {} ", caption)
            }
        })
        .collect();
    writeln!(f, "{}", tabs.join("  "))?;
    writeln!(f)?;

    let mut rendered = 0;
    for (index, task) in app.store().list_visible(app.filter()).enumerate() {
        rendered += 1;
        writeln!(f, "{}", render_row(index + 1, task, &options.date_format, painter))?;
    }

    if rendered == 0 {
        writeln!(f, "{}", painter.rgb(EMPTY_MESSAGE, MUTED_RGB))?;
    }

    Ok(())
}

fn render_row(row: usize, task: &Task, date_format: &str, painter: &Painter) -> String {
    let checkbox = if task.completed {
        painter.rgb("[x]", CHECK_RGB)
    } else {
        "[ ]".to_string()
    };

    format!(
        "{:>3}. {} {} {}  {}",
        row,
        painter.badge(task.priority),
        checkbox,
        task.description,
        painter.rgb(&task.created_at_display(date_format), DATE_RGB)
    )
}

fn write_new_task(f: &mut fmt::Formatter<'_>, app: &App, painter: &Painter) -> fmt::Result {
    writeln!(f, "{} {}", painter.rgb("<", ACCENT_RGB), painter.bold("Create new task"))?;
    writeln!(f)?;
    writeln!(f, "{}", painter.bold("Task"))?;

    let draft = app.draft();
    let field = if draft.description.is_empty() {
        painter.rgb(INPUT_PLACEHOLDER, DATE_RGB)
    } else {
        draft.description.clone()
    };
    writeln!(f, "  > {}", field)?;
    writeln!(f)?;

    let options: Vec<String> = Priority::ALL
        .iter()
        .map(|&priority| {
            if draft.priority == Some(priority) {
                painter.selected(&format!("({})", priority))
            } else {
                format!(" {} ", priority)
            }
        })
        .collect();
    writeln!(f, "{} {}", painter.bold("Priority"), options.join(" "))?;
    writeln!(f)?;

    let add = if app.can_submit() {
        painter.rgb("[Add]", ACCENT_RGB)
    } else {
        painter.rgb("[Add] (needs a description and a priority)", DISABLED_RGB)
    };
    writeln!(f, "{}", add)
}

/// Applies terminal styling only when colour output is on
struct Painter {
    color: bool,
}

impl Painter {
    fn apply(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn rgb(&self, text: &str, (r, g, b): (u8, u8, u8)) -> String {
        self.apply(text, |t| t.truecolor(r, g, b))
    }

    fn bold(&self, text: &str) -> String {
        self.apply(text, |t| t.bold())
    }

    fn selected(&self, text: &str) -> String {
        self.apply(text, |t| t.truecolor(11, 11, 11).on_truecolor(180, 180, 200))
    }

    fn badge(&self, priority: Priority) -> String {
        let (r, g, b) = priority.rgb();
        if self.color {
            "●".truecolor(r, g, b).to_string()
        } else {
            format!("{:<6}", priority.label())
        }
    }
}
