#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Title(String),
    Text(String),
    Art(String),
    Event(String),
    Exits(String),
    /// Real-time pacing point between combat rounds.
    Pause,
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn art(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Art(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    pub fn pause(&mut self) {
        self.blocks.push(OutputBlock::Pause);
    }

    pub fn exits(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Exits(s));
        }
    }

    /// Plain text of every block, one line per block. Used by tests and
    /// non-interactive callers.
    pub fn lines(&self) -> Vec<String> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                OutputBlock::Title(s)
                | OutputBlock::Text(s)
                | OutputBlock::Art(s)
                | OutputBlock::Event(s)
                | OutputBlock::Exits(s) => Some(s.clone()),
                OutputBlock::Pause => None,
            })
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.contains(needle))
    }
}
