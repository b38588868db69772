// ClipStack - Orchestrateur principal (hote console)
// Connecte la pile, la configuration, le presse-papiers et les rendus
//
// Ce fichier est l'hote sans interface graphique de ClipStack. Il joue
// le role des collaborateurs externes (scrutation du presse-papiers,
// raccourci global, bezel, menu, dialogues) en lisant une commande par
// ligne sur l'entree standard et en affichant les directives en texte.
//
// # Architecture
// L'application est mono-thread : une commande est traitee a la fois.
// Pour chaque commande, un `Interactions` est construit en empruntant la
// pile et les collaborateurs, puis relache. Les taches differees (frappe
// "coller") sont executees apres chaque commande.
//
// # Cycle de vie
// 1. `App::new()` : chargement config et historique
// 2. `App::run()` : boucle de lecture des commandes
// 3. `App::shutdown()` : attente des collages en cours, sauvegarde finale
//
// # Commandes
// - `copy <texte>`   : nouvelle valeur dans le presse-papiers
// - `hotkey`         : raccourci d'activation
// - `key <nom>`      : touche dans le bezel (ex: `key down`, `key shift+v`)
// - `release`        : relachement du modificateur
// - `menu <n>`, `place <n>`, `paste <n>`, `delete <n>` : entree n du menu (1-indexee)
// - `clear [yes|no] [always]` : vider l'historique ; `always` coche
//                      "ne plus demander"
// - `list`           : afficher le menu
// - `wait <ms>`      : laisser passer le temps
// - `cancel`         : annuler la frappe "coller" en attente
// - `quit`           : sauvegarder et quitter

use crate::clipboard::{MemoryPasteboard, Pasteboard};
use crate::config::source::{ConfigSource, SettingsFile};
use crate::constants::{CONFIG_FILENAME, HISTORY_FILENAME};
use crate::error::{ClipError, ClipResult};
use crate::history::stack::ClippingStack;
use crate::interaction::{Collaborators, Interactions};
use crate::storage;
use crate::system::keys::KeyEvent;
use crate::system::timer::{Clock, DeferredScheduler, SystemClock, TimerId, TimerQueue};
use crate::ui::{ClearConfirmation, ConsoleBezel, ConsoleHost, ConsoleMenu, MenuRenderer};
use std::io::{self, BufRead, Stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Emplacements des fichiers de l'application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config: PathBuf,
    pub history: PathBuf,
}

impl AppPaths {
    /// Fichiers ranges dans un meme repertoire.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            config: dir.join(CONFIG_FILENAME),
            history: dir.join(HISTORY_FILENAME),
        }
    }

    /// Repertoire de configuration de l'utilisateur, ou `.` a defaut.
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("clipstack"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Commande de l'hote console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Copy(String),
    Hotkey,
    Key(KeyEvent),
    Release,
    /// Clic simple sur l'entree (index 0-base)
    Menu(usize),
    Place(usize),
    Paste(usize),
    Delete(usize),
    Clear(ClearConfirmation),
    List,
    Wait(Duration),
    /// Annule la frappe "coller" en attente
    Cancel,
    Quit,
}

impl Command {
    /// Parse une ligne de commande.
    pub fn parse(line: &str) -> ClipResult<Self> {
        let trimmed = line.trim();
        let (word, rest) = match trimmed.split_once(' ') {
            Some((w, r)) => (w, r),
            None => (trimmed, ""),
        };
        let cmd = match word.to_lowercase().as_str() {
            "copy" => Self::Copy(rest.to_string()),
            "hotkey" => Self::Hotkey,
            "key" => Self::Key(
                KeyEvent::parse(rest)
                    .ok_or_else(|| ClipError::InvalidCommand(format!("unknown key '{}'", rest.trim())))?,
            ),
            "release" => Self::Release,
            "menu" => Self::Menu(parse_menu_number(rest)?),
            "place" => Self::Place(parse_menu_number(rest)?),
            "paste" => Self::Paste(parse_menu_number(rest)?),
            "delete" => Self::Delete(parse_menu_number(rest)?),
            "clear" => Self::Clear(parse_clear_answer(rest)?),
            "list" => Self::List,
            "cancel" => Self::Cancel,
            "wait" => {
                let ms: u64 = rest
                    .trim()
                    .parse()
                    .map_err(|_| ClipError::InvalidCommand(format!("invalid delay '{}'", rest.trim())))?;
                Self::Wait(Duration::from_millis(ms))
            }
            "quit" | "exit" => Self::Quit,
            other => return Err(ClipError::InvalidCommand(format!("unknown command '{}'", other))),
        };
        Ok(cmd)
    }
}

/// Numero d'entree affiche (1-indexe) vers index de pile.
fn parse_menu_number(s: &str) -> ClipResult<usize> {
    match s.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(ClipError::InvalidCommand(format!("invalid entry number '{}'", s.trim()))),
    }
}

/// `clear [yes|no] [always]`
fn parse_clear_answer(s: &str) -> ClipResult<ClearConfirmation> {
    let mut answer = ClearConfirmation::accept();
    for word in s.split_whitespace() {
        match word.to_lowercase().as_str() {
            "yes" | "y" => answer.confirmed = true,
            "no" | "n" => answer.confirmed = false,
            "always" => answer.suppress_future = true,
            other => {
                return Err(ClipError::InvalidCommand(format!("invalid clear option '{}'", other)))
            }
        }
    }
    Ok(answer)
}

/// Suite de la boucle apres une commande.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Application principale ClipStack.
pub struct App {
    stack: ClippingStack,
    config: SettingsFile,
    pasteboard: MemoryPasteboard,
    bezel: ConsoleBezel<Stdout>,
    menu: ConsoleMenu<Stdout>,
    host: ConsoleHost<Stdout>,
    timers: TimerQueue<SystemClock>,
    history_path: PathBuf,
    /// Derniere frappe "coller" planifiee
    pending_paste: Option<TimerId>,
}

impl App {
    /// Cree l'application : configuration puis historique.
    ///
    /// # Errors
    /// - `ClipError::Io` : fichier d'historique illisible
    /// - `ClipError::Storage` / `UnsupportedVersion` : historique corrompu
    pub fn new(paths: &AppPaths) -> ClipResult<Self> {
        let config = SettingsFile::open(&paths.config);
        let settings = config.settings().clone();

        let mut stack = ClippingStack::new(settings.general.max_items);
        storage::load_history(&paths.history, &mut stack)?;

        Ok(Self {
            stack,
            pasteboard: MemoryPasteboard::new(),
            bezel: ConsoleBezel::new(io::stdout(), settings.bezel.paste_on_select),
            menu: ConsoleMenu::new(
                io::stdout(),
                settings.menu.preview_length,
                settings.menu.paste_on_select,
            ),
            host: ConsoleHost::new(io::stdout()),
            timers: TimerQueue::new(SystemClock),
            history_path: paths.history.clone(),
            pending_paste: None,
            config,
        })
    }

    /// Pile courante.
    pub fn stack(&self) -> &ClippingStack {
        &self.stack
    }

    /// Presse-papiers courant.
    pub fn pasteboard(&self) -> &MemoryPasteboard {
        &self.pasteboard
    }

    /// Configuration courante.
    pub fn config(&self) -> &SettingsFile {
        &self.config
    }

    /// Emprunte la pile et les collaborateurs pour un evenement.
    fn interactions(&mut self) -> Interactions<'_> {
        Interactions::new(
            &mut self.stack,
            Collaborators {
                pasteboard: &mut self.pasteboard,
                bezel: &mut self.bezel,
                menu: &mut self.menu,
                app: &mut self.host,
                config: &mut self.config,
                scheduler: &mut self.timers,
            },
        )
    }

    /// Boucle principale : une commande par ligne jusqu'a `quit` ou EOF.
    pub fn run(&mut self) -> ClipResult<()> {
        info!(
            count = self.stack.len(),
            sticky = self.config.sticky_bezel(),
            "clipstack ready"
        );
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Ok(cmd) => {
                    if self.dispatch(cmd) == Flow::Quit {
                        break;
                    }
                }
                Err(e) => warn!(error = %e, "ignored input"),
            }
        }
        self.shutdown()
    }

    /// Applique une commande puis execute les taches echues.
    pub fn dispatch(&mut self, cmd: Command) -> Flow {
        let mut flow = Flow::Continue;
        match cmd {
            Command::Copy(text) => self.pasteboard_copy(&text),
            Command::Hotkey => self.interactions().on_activation_hotkey(),
            Command::Key(event) => self.interactions().on_key_down(event),
            Command::Release => {
                let id = self.interactions().on_modifier_released();
                self.track_paste(id);
            }
            Command::Menu(i) => {
                let id = self.interactions().on_menu_selection(i);
                self.track_paste(id);
            }
            Command::Place(i) => self.interactions().on_menu_place(i),
            Command::Paste(i) => {
                let id = self.interactions().on_menu_paste(i);
                self.track_paste(id);
            }
            Command::Cancel => {
                if let Some(id) = self.pending_paste.take() {
                    if self.timers.cancel(id) {
                        info!("pending paste cancelled");
                    }
                }
            }
            Command::Delete(i) => self.interactions().on_menu_delete_activated(i),
            Command::Clear(answer) => {
                self.host.set_answer(answer);
                self.interactions().on_clear_all_requested();
            }
            Command::List => self.menu.rebuild(&self.stack),
            Command::Wait(d) => std::thread::sleep(d),
            Command::Quit => flow = Flow::Quit,
        }
        self.interactions().run_due_tasks();
        flow
    }

    fn track_paste(&mut self, id: Option<TimerId>) {
        if id.is_some() {
            self.pending_paste = id;
        }
    }

    /// Copie de l'utilisateur. Les ecritures du controleur (placer,
    /// vider) ne passent pas par ici : seule une copie externe est
    /// transmise, jamais autogeneree.
    fn pasteboard_copy(&mut self, text: &str) {
        self.pasteboard.set(text);
        self.interactions().on_pasteboard_changed(text, false);
    }

    /// Attend les collages en cours puis sauvegarde si necessaire.
    pub fn shutdown(&mut self) -> ClipResult<()> {
        while let Some(deadline) = self.timers.next_deadline() {
            let now = self.timers.clock().now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            }
            self.interactions().run_due_tasks();
        }
        if self.stack.is_dirty() {
            storage::save_history(&self.history_path, &mut self.stack)?;
        }
        Ok(())
    }
}
