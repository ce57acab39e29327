use std::collections::BTreeSet;

use crate::model::{BotStatus, CommandDescriptor, ExecutionLogEntry, ServerSummary};

/// Which command categories the Commands tab shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category,
        }
    }
}

/// Holds the last-fetched snapshot of each entity kind. Snapshots are
/// replaced wholesale and never merged; a failed fetch leaves the prior
/// snapshot untouched. The four snapshots are independently stale.
#[derive(Default)]
pub struct DashboardStore {
    pub status: BotStatus,
    pub servers: Vec<ServerSummary>,
    pub commands: Vec<CommandDescriptor>,
    pub logs: Vec<ExecutionLogEntry>,
    pub selected_category: CategoryFilter,
}

impl DashboardStore {
    pub fn replace_status(&mut self, status: BotStatus) {
        self.status = status;
    }

    pub fn replace_servers(&mut self, servers: Vec<ServerSummary>) {
        self.servers = servers;
    }

    pub fn replace_commands(&mut self, commands: Vec<CommandDescriptor>) {
        self.commands = commands;
    }

    pub fn replace_logs(&mut self, logs: Vec<ExecutionLogEntry>) {
        self.logs = logs;
    }

    /// The command snapshot narrowed by the selected category, original
    /// relative order preserved. Derived on every call, never stored.
    pub fn filtered_commands(&self) -> Vec<&CommandDescriptor> {
        match &self.selected_category {
            CategoryFilter::All => self.commands.iter().collect(),
            CategoryFilter::Only(category) => self
                .commands
                .iter()
                .filter(|c| &c.category == category)
                .collect(),
        }
    }

    /// Distinct categories in the current command snapshot, lexicographic.
    pub fn categories(&self) -> Vec<String> {
        self.commands
            .iter()
            .map(|c| c.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Advance the filter: all -> first category -> ... -> last -> all.
    /// A category that vanished from the snapshot wraps back to all.
    pub fn cycle_category(&mut self) {
        let categories = self.categories();
        self.selected_category = match &self.selected_category {
            CategoryFilter::All => match categories.first() {
                Some(first) => CategoryFilter::Only(first.clone()),
                None => CategoryFilter::All,
            },
            CategoryFilter::Only(current) => {
                match categories.iter().position(|c| c == current) {
                    Some(i) if i + 1 < categories.len() => {
                        CategoryFilter::Only(categories[i + 1].clone())
                    }
                    _ => CategoryFilter::All,
                }
            }
        };
    }
}
