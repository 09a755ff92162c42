//! Mock terminal: canned command interpreter with staged output.
//!
//! No process is ever spawned; every command appends pre-written lines,
//! the slower ones in stages through the reveal queue to imitate real
//! execution. Input is disabled while a command is "running".

use std::time::{Duration, Instant};

use tracing::debug;

use crate::reveal::TimedRevealQueue;

pub const BANNER: &[&str] = &["NeonCode Terminal v1.0.0", "Type \"help\" for available commands"];
const HISTORY_CAP: usize = 20;

const MS_0: Duration = Duration::ZERO;

/// Side effect the shell asks the hosting panel to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEffect {
    None,
    /// `exit` closes the terminal panel.
    Close,
}

#[derive(Debug)]
pub struct MockShell {
    output: Vec<String>,
    history: Vec<String>,
    history_index: Option<usize>,
    pending: TimedRevealQueue<String>,
}

impl MockShell {
    pub fn new() -> Self {
        Self {
            output: BANNER.iter().map(|l| l.to_string()).collect(),
            history: Vec::new(),
            history_index: None,
            pending: TimedRevealQueue::new(),
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// True while staged output is still being revealed.
    pub fn is_executing(&self) -> bool {
        self.pending.is_pending()
    }

    pub fn clear(&mut self) {
        self.pending.cancel();
        self.output = vec![BANNER[0].to_string()];
    }

    /// Reveal staged lines whose delay has elapsed.
    pub fn poll(&mut self, now: Instant) {
        for line in self.pending.poll(now) {
            self.output.push(line);
        }
    }

    /// Most-recent-first history recall (Up key).
    pub fn history_prev(&mut self) -> Option<&str> {
        if self.history.is_empty() {
            return None;
        }
        let next = match self.history_index {
            None => 0,
            Some(i) => (i + 1).min(self.history.len() - 1),
        };
        self.history_index = Some(next);
        self.history.get(next).map(String::as_str)
    }

    /// Step back toward the newest entry (Down key); `None` means the
    /// input line should be cleared.
    pub fn history_next(&mut self) -> Option<&str> {
        match self.history_index {
            Some(i) if i > 0 => {
                self.history_index = Some(i - 1);
                self.history.get(i - 1).map(String::as_str)
            }
            Some(_) => {
                self.history_index = None;
                None
            }
            None => None,
        }
    }

    /// Run one command line. Blank input and input while executing are
    /// ignored. The echo and any instant output appear immediately;
    /// slower lines are staged on the reveal queue.
    pub fn execute(&mut self, command: &str, now: Instant) -> ShellEffect {
        let command = command.trim();
        if command.is_empty() || self.is_executing() {
            return ShellEffect::None;
        }

        self.history.insert(0, command.to_string());
        self.history.truncate(HISTORY_CAP);
        self.history_index = None;

        self.output.push(format!("> {command}"));
        debug!(command, "shell execute");

        let lower = command.to_lowercase();
        match lower.as_str() {
            "help" => self.push_all(HELP_LINES),
            "clear" => self.clear(),
            "exit" => return ShellEffect::Close,
            "run" => {
                self.output.push("Running code...".into());
                self.stage(
                    now,
                    &[
                        (800, "Compilation successful!"),
                        (0, "Output:"),
                        (0, "Hello, NeonCode!"),
                    ],
                );
            }
            "debug" => {
                self.output.push("Starting debug session...".into());
                self.stage(
                    now,
                    &[
                        (600, "Breakpoints set."),
                        (400, "Variables initialized."),
                        (300, "Debug session active. Use step/continue commands."),
                    ],
                );
            }
            "version" => self.push_all(VERSION_LINES),
            "ls" => self.push_all(LS_LINES),
            _ => {
                if let Some(rest) = command.strip_prefix("npm ") {
                    self.npm(rest, now);
                } else if let Some(rest) = command.strip_prefix("git ") {
                    self.git(rest, now);
                } else if let Some(text) = command.strip_prefix("echo ") {
                    self.output.push(text.to_string());
                } else if let Some(file) = command.strip_prefix("cat ") {
                    self.cat(file.trim());
                } else {
                    self.output.push(format!("Command not recognized: {command}"));
                    self.output
                        .push("Type \"help\" for available commands".into());
                }
            }
        }
        ShellEffect::None
    }

    fn push_all(&mut self, lines: &[&str]) {
        self.output.extend(lines.iter().map(|l| l.to_string()));
    }

    fn stage(&mut self, now: Instant, items: &[(u64, &str)]) {
        self.pending.schedule(
            now,
            items
                .iter()
                .map(|(ms, line)| (Duration::from_millis(*ms), line.to_string()))
                .collect::<Vec<_>>(),
        );
    }

    fn npm(&mut self, npm_command: &str, now: Instant) {
        self.output
            .push(format!("Executing npm command: {npm_command}..."));
        if npm_command.contains("install") {
            self.stage(
                now,
                &[
                    (1500, "Installing packages..."),
                    (800, "+ react@18.2.0"),
                    (200, "+ react-dom@18.2.0"),
                    (300, "added 3 packages in 1.2s"),
                ],
            );
        } else if npm_command.contains("start") {
            self.stage(
                now,
                &[
                    (1500, "Starting development server..."),
                    (800, "Compiled successfully!"),
                    (0, "Server running at http://localhost:3000/"),
                ],
            );
        } else {
            let line = format!("npm command '{npm_command}' completed successfully.");
            self.pending
                .schedule_one(now, Duration::from_millis(1500), line);
        }
    }

    fn git(&mut self, git_command: &str, now: Instant) {
        self.output
            .push(format!("Executing git command: {git_command}..."));
        let delay = Duration::from_millis(800);
        if git_command == "status" {
            self.pending.schedule(
                now,
                GIT_STATUS_LINES
                    .iter()
                    .enumerate()
                    .map(|(i, l)| (if i == 0 { delay } else { MS_0 }, l.to_string()))
                    .collect::<Vec<_>>(),
            );
        } else if git_command.starts_with("commit") {
            let message = git_command
                .split_once("-m")
                .map(|(_, rest)| rest.trim())
                .filter(|m| !m.is_empty())
                .unwrap_or("Commit changes");
            self.pending.schedule(
                now,
                vec![
                    (delay, format!("[main 5a7e8f9] {message}")),
                    (MS_0, "2 files changed, 45 insertions(+), 12 deletions(-)".into()),
                ],
            );
        } else {
            let line = format!("git command '{git_command}' completed successfully.");
            self.pending.schedule_one(now, delay, line);
        }
    }

    fn cat(&mut self, file: &str) {
        match file {
            "main.js" => self.push_all(CAT_MAIN_JS),
            "package.json" => self.push_all(CAT_PACKAGE_JSON),
            _ => self.output.push(format!("File not found: {file}")),
        }
    }
}

impl Default for MockShell {
    fn default() -> Self {
        Self::new()
    }
}

const HELP_LINES: &[&str] = &[
    "Available commands:",
    "  help - Show this help message",
    "  clear - Clear terminal",
    "  run - Execute current code",
    "  debug - Start debug session",
    "  version - Show version information",
    "  npm [command] - Run npm commands (e.g., npm install react)",
    "  git [command] - Run git commands (e.g., git status)",
    "  ls - List files in current directory",
    "  cat [file] - Display file contents",
    "  echo [text] - Print text to terminal",
    "  exit - Close terminal",
];

const VERSION_LINES: &[&str] = &[
    "NeonCode v0.1.0",
    "Build: 20250330-1",
    "Engine: NC Runtime v2.4.2",
    "Node: v18.12.1",
];

const LS_LINES: &[&str] = &["main.js", "styles.css", "index.html", "package.json", "README.md"];

const GIT_STATUS_LINES: &[&str] = &[
    "On branch main",
    "Your branch is up to date with 'origin/main'.",
    "Changes not staged for commit:",
    "  modified:   src/editor.js",
    "  modified:   src/terminal.js",
];

const CAT_MAIN_JS: &[&str] = &[
    "// Main JavaScript file",
    "function calculateFibonacci(n) {",
    "  if (n <= 1) return n;",
    "  return calculateFibonacci(n-1) + calculateFibonacci(n-2);",
    "}",
    "",
    "console.log(\"Fibonacci(10) =\", calculateFibonacci(10));",
];

const CAT_PACKAGE_JSON: &[&str] = &[
    "{",
    "  \"name\": \"neoncode-project\",",
    "  \"version\": \"1.0.0\",",
    "  \"description\": \"Next-gen coding experience\",",
    "  \"main\": \"index.js\",",
    "  \"dependencies\": {",
    "    \"react\": \"^18.2.0\",",
    "    \"react-dom\": \"^18.2.0\"",
    "  }",
    "}",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};

    #[test]
    fn run_reveals_output_in_stages() {
        let clock = ManualClock::new();
        let mut shell = MockShell::new();
        shell.execute("run", clock.now());

        assert_eq!(shell.output().last().unwrap(), "Running code...");
        assert!(shell.is_executing());

        clock.advance(Duration::from_millis(800));
        shell.poll(clock.now());
        let tail: Vec<_> = shell.output().iter().rev().take(3).rev().collect();
        assert_eq!(tail, ["Compilation successful!", "Output:", "Hello, NeonCode!"]);
        assert!(!shell.is_executing());
    }

    #[test]
    fn input_while_executing_is_ignored() {
        let clock = ManualClock::new();
        let mut shell = MockShell::new();
        shell.execute("debug", clock.now());
        let len = shell.output().len();
        shell.execute("ls", clock.now());
        assert_eq!(shell.output().len(), len);
    }

    #[test]
    fn exit_requests_panel_close() {
        let clock = ManualClock::new();
        let mut shell = MockShell::new();
        assert_eq!(shell.execute("exit", clock.now()), ShellEffect::Close);
        assert_eq!(shell.execute("ls", clock.now()), ShellEffect::None);
    }

    #[test]
    fn unknown_command_falls_back() {
        let clock = ManualClock::new();
        let mut shell = MockShell::new();
        shell.execute("frobnicate", clock.now());
        let n = shell.output().len();
        assert_eq!(shell.output()[n - 2], "Command not recognized: frobnicate");
    }

    #[test]
    fn git_commit_extracts_the_message() {
        let clock = ManualClock::new();
        let mut shell = MockShell::new();
        shell.execute("git commit -m fix the parser", clock.now());
        clock.advance(Duration::from_millis(800));
        shell.poll(clock.now());
        assert!(shell
            .output()
            .iter()
            .any(|l| l == "[main 5a7e8f9] fix the parser"));
    }

    #[test]
    fn npm_install_stages_package_lines() {
        let clock = ManualClock::new();
        let mut shell = MockShell::new();
        shell.execute("npm install react", clock.now());

        clock.advance(Duration::from_millis(1500));
        shell.poll(clock.now());
        assert_eq!(shell.output().last().unwrap(), "Installing packages...");

        clock.advance(Duration::from_millis(1300));
        shell.poll(clock.now());
        assert_eq!(shell.output().last().unwrap(), "added 3 packages in 1.2s");
    }

    #[test]
    fn history_recall_is_most_recent_first_and_capped() {
        let clock = ManualClock::new();
        let mut shell = MockShell::new();
        for i in 0..25 {
            shell.execute(&format!("echo {i}"), clock.now());
        }
        assert_eq!(shell.history_prev(), Some("echo 24"));
        assert_eq!(shell.history_prev(), Some("echo 23"));
        assert_eq!(shell.history_next(), Some("echo 24"));
        assert_eq!(shell.history_next(), None);

        // Cap at 20: the oldest entries fall off.
        for _ in 0..30 {
            shell.history_prev();
        }
        assert_eq!(shell.history_prev(), Some("echo 5"));
    }

    #[test]
    fn clear_drops_output_and_pending_reveals() {
        let clock = ManualClock::new();
        let mut shell = MockShell::new();
        shell.execute("run", clock.now());
        shell.execute("clear", clock.now());
        // "clear" is refused while executing, so cancel via clear().
        shell.clear();
        clock.advance(Duration::from_secs(5));
        shell.poll(clock.now());
        assert_eq!(shell.output(), [BANNER[0].to_string()]);
    }
}
