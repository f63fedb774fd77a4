use crate::domain::model::{BreedView, PageInfo, Tab};
use crate::domain::ports::Presenter;
use crate::utils::error::Result;
use std::io::Write;

/// Plain-text rendering of the page onto any writer.
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show_banner(&mut self, page: &PageInfo) -> Result<()> {
        writeln!(self.out, "=== {} ===", page.title)?;
        writeln!(self.out, "{}", page.headline)?;
        writeln!(self.out, "[image: {}]", page.hero_image)?;
        let labels: Vec<&str> = Tab::ALL.iter().map(Tab::label).collect();
        writeln!(self.out, "Tabs: {}", labels.join(" | "))?;
        writeln!(self.out, "Type 'help' for commands.")?;
        self.out.flush()?;
        Ok(())
    }

    fn show_tab(&mut self, tab: Tab) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- {} ---", tab.heading())?;
        writeln!(self.out, "{}", tab.description())?;
        Ok(())
    }

    fn show_fact(&mut self, index: usize, total: usize, fact: &str) -> Result<()> {
        writeln!(self.out, "[{}/{}] {}", index + 1, total, fact)?;
        self.out.flush()?;
        Ok(())
    }

    fn show_breeds(&mut self, breeds: &[BreedView]) -> Result<()> {
        for (position, breed) in breeds.iter().enumerate() {
            let heart = if breed.liked { "♥" } else { "♡" };
            writeln!(
                self.out,
                "{}. {} {} - {}",
                position + 1,
                heart,
                breed.display_name,
                breed.description
            )?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn show_like(&mut self, breed: &BreedView) -> Result<()> {
        let verb = if breed.liked { "Liked" } else { "Unliked" };
        writeln!(self.out, "{} {}", verb, breed.display_name)?;
        self.out.flush()?;
        Ok(())
    }

    fn show_notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()?;
        Ok(())
    }
}
