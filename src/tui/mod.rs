pub mod app;
pub mod colors;
pub mod list;
pub mod search;
pub mod ui;

pub use app::{App, Focus};

use crate::{CandidateList, WidgetConfig};

/// Entry point: take over the terminal and run the search box until quit
pub fn run(candidates: CandidateList, config: WidgetConfig) -> crate::Result<()> {
    let mut terminal = ratatui::init();
    let mut app = App::new(candidates, config);
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}
