pub trait Stats {
    fn record_state_visited(&mut self);
    fn record_terminal_scored(&mut self);
}

#[derive(Debug, Default)]
pub struct NullStats;

impl Stats for NullStats {
    fn record_state_visited(&mut self) {}
    fn record_terminal_scored(&mut self) {}
}

#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct SimpleStats {
    pub states_visited: u64,
    pub terminal_count: u64,
}

impl Stats for SimpleStats {
    fn record_state_visited(&mut self) {
        self.states_visited += 1;
    }

    fn record_terminal_scored(&mut self) {
        self.terminal_count += 1;
    }
}
