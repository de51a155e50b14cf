// Text labels shown over the scene

/// A plain text label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLabel {
    pub text: String,
    pub hidden: bool,
}

impl TextLabel {
    /// Replace the label text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Text as it should be displayed, empty when hidden
    pub fn visible_text(&self) -> &str {
        if self.hidden {
            ""
        } else {
            &self.text
        }
    }
}

/// The two labels of the game's display surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    /// "score: S level: L"
    pub score: TextLabel,
    /// Countdown digits before a round starts
    pub countdown: TextLabel,
}

impl Hud {
    /// One-line caption combining both labels
    pub fn caption(&self) -> String {
        match self.countdown.visible_text() {
            "" => self.score.visible_text().to_string(),
            countdown => format!("{}  |  {}", self.score.visible_text(), countdown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_label_shows_nothing() {
        let mut label = TextLabel::default();
        label.set_text("3");
        assert_eq!(label.visible_text(), "3");

        label.hidden = true;
        assert_eq!(label.visible_text(), "");
    }

    #[test]
    fn test_caption() {
        let mut hud = Hud::default();
        hud.score.set_text("score: 0 level: 1");
        hud.countdown.set_text("2");
        assert_eq!(hud.caption(), "score: 0 level: 1  |  2");

        hud.countdown.hidden = true;
        assert_eq!(hud.caption(), "score: 0 level: 1");
    }
}
