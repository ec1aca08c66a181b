//! Interactive console: a folders view and a files view over the same
//! listing pipeline the CLI uses, plus prompts for search/create/upload and
//! the two-phase delete confirmation.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::listing::ListingState;
use crate::model::{FileEntry, Folder, previewable};
use crate::remote::{Gateway, Outcome};
use crate::store::SessionStore;

mod input;
use input::Input;

mod view;

const FOLDER_PAGE_SIZE: usize = 10;
const FILE_PAGE_SIZE: usize = 7;

pub(crate) fn run() -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!(
            "the interactive shell requires a terminal (TTY); use the subcommands instead"
        );
    }

    let store = SessionStore::open()?;
    let cfg = store.read_config()?;
    let token = store.session_token()?;
    let gateway = Gateway::new(cfg.base_url, token)?;

    let mut app = App::new(gateway);
    app.load_folders();

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|frame| view::render(frame, app))
            .context("draw frame")?;

        if event::poll(Duration::from_millis(250)).context("poll input")?
            && let Event::Key(key) = event::read().context("read input")?
            && key.kind == KeyEventKind::Press
        {
            app.on_key(key);
        }

        if app.quit {
            return Ok(());
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    Folders,
    Files,
    SessionExpired,
    AccessDenied,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PromptKind {
    Search,
    CreateFolder,
    Upload,
}

struct Prompt {
    kind: PromptKind,
    input: Input,
}

struct Notice {
    text: String,
    error: bool,
}

struct App {
    gateway: Gateway,
    screen: Screen,
    /// Scope of the files view; `None` while on the folders view.
    folder: Option<String>,
    folders: ListingState<Folder>,
    files: ListingState<FileEntry>,
    /// Index into the current page of the active listing.
    selected: usize,
    prompt: Option<Prompt>,
    notice: Option<Notice>,
    quit: bool,
}

impl App {
    fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            screen: Screen::Folders,
            folder: None,
            folders: ListingState::new(FOLDER_PAGE_SIZE),
            files: ListingState::new(FILE_PAGE_SIZE),
            selected: 0,
            prompt: None,
            notice: None,
            quit: false,
        }
    }

    fn info(&mut self, text: String) {
        self.notice = Some(Notice { text, error: false });
    }

    fn error(&mut self, text: String) {
        self.notice = Some(Notice { text, error: true });
    }

    fn page_len(&self) -> usize {
        match self.screen {
            Screen::Folders => self.folders.current_page().items.len(),
            Screen::Files => self.files.current_page().items.len(),
            _ => 0,
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.page_len();
        self.selected = if len == 0 {
            0
        } else {
            self.selected.min(len - 1)
        };
    }

    fn load_folders(&mut self) {
        match self.gateway.list_folders() {
            Outcome::Ok(items) => {
                self.folders.replace_items(items);
                self.clamp_selection();
            }
            Outcome::Unauthenticated => self.screen = Screen::SessionExpired,
            Outcome::Forbidden => self.screen = Screen::AccessDenied,
            // Prior items stay; the failure is a transient notice.
            Outcome::Failed(msg) => self.error(msg),
        }
    }

    fn load_files(&mut self) {
        let Some(folder) = self.folder.clone() else {
            return;
        };
        let outcome = self.gateway.list_files(&folder);
        self.apply_files_outcome(outcome);
    }

    fn apply_files_outcome(&mut self, outcome: Outcome<Vec<FileEntry>>) {
        match outcome {
            Outcome::Ok(items) => {
                self.files.replace_items(items);
                self.clamp_selection();
            }
            Outcome::Unauthenticated => self.screen = Screen::SessionExpired,
            Outcome::Forbidden => self.screen = Screen::AccessDenied,
            Outcome::Failed(msg) => self.error(msg),
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }
        if self.prompt.is_some() {
            self.on_prompt_key(key);
            return;
        }
        if self.awaiting_confirmation() {
            self.on_confirm_key(key);
            return;
        }
        match self.screen {
            Screen::Folders => self.on_folders_key(key),
            Screen::Files => self.on_files_key(key),
            Screen::SessionExpired => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) {
                    self.quit = true;
                }
            }
            Screen::AccessDenied => match key.code {
                KeyCode::Char('q') => self.quit = true,
                KeyCode::Esc | KeyCode::Enter => self.close_folder(),
                _ => {}
            },
        }
    }

    fn awaiting_confirmation(&self) -> bool {
        match self.screen {
            Screen::Folders => self.folders.awaiting_confirmation(),
            Screen::Files => self.files.awaiting_confirmation(),
            _ => false,
        }
    }

    fn on_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => self.confirm_pending_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => match self.screen {
                Screen::Folders => self.folders.cancel_delete(),
                Screen::Files => self.files.cancel_delete(),
                _ => {}
            },
            _ => {}
        }
    }

    /// The gate closes regardless of how the delete call turns out.
    fn confirm_pending_delete(&mut self) {
        match self.screen {
            Screen::Folders => {
                let Some(path) = self.folders.confirm_delete() else {
                    return;
                };
                match self.gateway.delete_folder(&path) {
                    Outcome::Ok(_) => {
                        self.info(format!("Deleted folder '{path}'"));
                        self.load_folders();
                    }
                    Outcome::Unauthenticated => self.screen = Screen::SessionExpired,
                    Outcome::Forbidden => self.screen = Screen::AccessDenied,
                    Outcome::Failed(msg) => self.error(msg),
                }
            }
            Screen::Files => {
                let Some(filename) = self.files.confirm_delete() else {
                    return;
                };
                let Some(folder) = self.folder.clone() else {
                    return;
                };
                match self.gateway.delete_file(&folder, &filename) {
                    Outcome::Ok(_) => {
                        self.info(format!("Deleted '{filename}'"));
                        self.load_files();
                    }
                    Outcome::Unauthenticated => self.screen = Screen::SessionExpired,
                    Outcome::Forbidden => self.screen = Screen::AccessDenied,
                    Outcome::Failed(msg) => self.error(msg),
                }
            }
            _ => {}
        }
    }

    fn on_folders_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected += 1;
                self.clamp_selection();
            }
            KeyCode::Left | KeyCode::Char('p') => {
                if self.folders.has_prev() {
                    self.folders.prev_page();
                    self.selected = 0;
                }
            }
            KeyCode::Right | KeyCode::Char('n') => {
                if self.folders.has_next() {
                    self.folders.next_page();
                    self.selected = 0;
                }
            }
            KeyCode::Char('/') => {
                self.open_prompt(PromptKind::Search, self.folders.query().to_string())
            }
            KeyCode::Char('r') => self.load_folders(),
            KeyCode::Char('c') => self.open_prompt(PromptKind::CreateFolder, String::new()),
            KeyCode::Char('d') => {
                if let Some(path) = self.selected_folder_path() {
                    self.folders.request_delete(path);
                }
            }
            KeyCode::Enter => {
                if let Some(path) = self.selected_folder_path() {
                    self.open_folder(path);
                }
            }
            _ => {}
        }
    }

    fn on_files_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.close_folder(),
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected += 1;
                self.clamp_selection();
            }
            KeyCode::Left | KeyCode::Char('p') => {
                if self.files.has_prev() {
                    self.files.prev_page();
                    self.selected = 0;
                }
            }
            KeyCode::Right | KeyCode::Char('n') => {
                if self.files.has_next() {
                    self.files.next_page();
                    self.selected = 0;
                }
            }
            KeyCode::Char('/') => {
                self.open_prompt(PromptKind::Search, self.files.query().to_string())
            }
            KeyCode::Char('r') => self.load_files(),
            KeyCode::Char('u') => self.open_prompt(PromptKind::Upload, String::new()),
            KeyCode::Char('d') => {
                if let Some(file) = self.selected_file() {
                    self.files.request_delete(file.filename);
                }
            }
            KeyCode::Char('o') => self.preview_selected(),
            KeyCode::Char('s') => self.download_selected(),
            _ => {}
        }
    }

    fn selected_folder_path(&self) -> Option<String> {
        self.folders
            .current_page()
            .items
            .get(self.selected)
            .map(|f| f.path.clone())
    }

    fn selected_file(&self) -> Option<FileEntry> {
        self.files.current_page().items.get(self.selected).cloned()
    }

    /// Listing state is created fresh on navigation into a folder.
    fn open_folder(&mut self, path: String) {
        self.folder = Some(path);
        self.files = ListingState::new(FILE_PAGE_SIZE);
        self.screen = Screen::Files;
        self.selected = 0;
        self.notice = None;
        self.load_files();
    }

    /// ... and discarded on navigation away.
    fn close_folder(&mut self) {
        self.folder = None;
        self.files = ListingState::new(FILE_PAGE_SIZE);
        self.screen = Screen::Folders;
        self.selected = 0;
        self.notice = None;
        self.load_folders();
    }

    fn preview_selected(&mut self) {
        let Some(file) = self.selected_file() else {
            return;
        };
        let Some(folder) = self.folder.clone() else {
            return;
        };
        if !previewable(&file.filename) {
            // Local refusal, no probe issued.
            self.error(format!("'{}' is not previewable", file.filename));
            return;
        }
        match self.gateway.probe_file(&folder, &file.filename, file.revision) {
            Outcome::Ok(()) => {
                let url = self
                    .gateway
                    .preview_url(&folder, &file.filename, file.revision);
                self.info(format!("Preview ready: {url}"));
            }
            Outcome::Unauthenticated => self.screen = Screen::SessionExpired,
            Outcome::Forbidden => self.screen = Screen::AccessDenied,
            Outcome::Failed(msg) => self.error(msg),
        }
    }

    fn download_selected(&mut self) {
        let Some(file) = self.selected_file() else {
            return;
        };
        let Some(folder) = self.folder.clone() else {
            return;
        };
        // Saved under the original filename, in the working directory.
        let dest = PathBuf::from(&file.filename);
        match self.gateway.download_file(&folder, &file.filename, &dest) {
            Outcome::Ok(bytes) => self.info(format!("Saved {} ({} bytes)", dest.display(), bytes)),
            Outcome::Unauthenticated => self.screen = Screen::SessionExpired,
            Outcome::Forbidden => self.screen = Screen::AccessDenied,
            Outcome::Failed(msg) => self.error(msg),
        }
    }

    fn open_prompt(&mut self, kind: PromptKind, initial: String) {
        let mut input = Input::default();
        input.set(initial);
        self.prompt = Some(Prompt { kind, input });
    }

    fn on_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        let kind = prompt.kind;
        let mut live_query: Option<String> = None;

        match key.code {
            KeyCode::Esc => {
                self.prompt = None;
                if kind == PromptKind::Search {
                    // Cancelling the search clears the filter.
                    self.set_active_query(String::new());
                }
                return;
            }
            KeyCode::Enter => {
                let value = prompt.input.buf.clone();
                self.prompt = None;
                self.submit_prompt(kind, value);
                return;
            }
            KeyCode::Backspace => {
                prompt.input.backspace();
                if kind == PromptKind::Search {
                    live_query = Some(prompt.input.buf.clone());
                }
            }
            KeyCode::Left => prompt.input.move_left(),
            KeyCode::Right => prompt.input.move_right(),
            KeyCode::Char(c) => {
                prompt.input.insert_char(c);
                if kind == PromptKind::Search {
                    live_query = Some(prompt.input.buf.clone());
                }
            }
            _ => {}
        }

        // Every search keystroke re-filters and returns to page 1.
        if let Some(query) = live_query {
            self.set_active_query(query);
        }
    }

    fn set_active_query(&mut self, query: String) {
        match self.screen {
            Screen::Folders => self.folders.set_query(query),
            Screen::Files => self.files.set_query(query),
            _ => {}
        }
        self.selected = 0;
    }

    fn submit_prompt(&mut self, kind: PromptKind, value: String) {
        match kind {
            PromptKind::Search => self.set_active_query(value),
            PromptKind::CreateFolder => self.create_folder(value),
            PromptKind::Upload => self.upload_files(value),
        }
    }

    fn create_folder(&mut self, name: String) {
        let name = name.trim().to_string();
        if name.is_empty() {
            // Local validation: the gateway is never called.
            self.error("folder name must not be empty".to_string());
            return;
        }
        let seed: Vec<PathBuf> = Vec::new();
        match self.gateway.create_folder(&name, &seed) {
            Outcome::Ok(_) => {
                self.info(format!("Created folder '{name}'"));
                self.load_folders();
            }
            Outcome::Unauthenticated => self.screen = Screen::SessionExpired,
            Outcome::Forbidden => self.screen = Screen::AccessDenied,
            Outcome::Failed(msg) => self.error(msg),
        }
    }

    fn upload_files(&mut self, value: String) {
        let Some(folder) = self.folder.clone() else {
            return;
        };
        let paths: Vec<PathBuf> = value.split_whitespace().map(PathBuf::from).collect();
        if paths.is_empty() {
            self.error("no files given".to_string());
            return;
        }

        // The batch carries its own single reload, even after partial failure.
        let batch = self.gateway.upload_batch(&folder, &paths);
        if batch.expired() {
            self.screen = Screen::SessionExpired;
            return;
        }

        let total = batch.results.len();
        let failures = batch.failure_lines();
        if failures.is_empty() {
            let plural = if total == 1 { "" } else { "s" };
            self.info(format!("Uploaded {total} file{plural}"));
        } else {
            self.error(format!(
                "{} of {total} uploads failed ({})",
                failures.len(),
                failures.join("; ")
            ));
        }
        self.apply_files_outcome(batch.reloaded);
    }
}
