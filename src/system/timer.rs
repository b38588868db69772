// ClipStack - File de taches differees
// Taches ponctuelles planifiees sur le contexte d'execution principal
//
// Le seul element asynchrone du coeur est le collage synthetique : apres
// avoir ecrit dans le presse-papiers, une frappe "coller" est emise
// `PASTE_DELAY` plus tard pour laisser l'application cible voir le
// changement. La file est interrogee par la boucle de l'hote, sur le
// meme thread : aucun verrou.
//
// # Determinisme
// L'horloge est injectable (`Clock`) : `SystemClock` en production,
// `ManualClock` dans les tests pour avancer le temps explicitement.
//
// # Annulation
// Chaque planification retourne un `TimerId` qui permet d'annuler la
// tache tant qu'elle n'a pas ete executee.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source de temps monotone.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Horloge systeme.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Horloge manuelle, partagee entre ses clones.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self { now: Rc::new(Cell::new(Instant::now())) }
    }

    /// Avance le temps de `d`.
    pub fn advance(&self, d: Duration) {
        self.now.set(self.now.get() + d);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Identifiant d'une tache planifiee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Tache differee executable par le controleur d'interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Emettre la frappe "coller" synthetique
    PasteKeystroke,
}

/// Planificateur de taches ponctuelles.
pub trait DeferredScheduler {
    /// Planifie `task` dans `delay`.
    fn schedule(&mut self, delay: Duration, task: DeferredTask) -> TimerId;
    /// Annule une tache en attente. Retourne false si elle n'existe plus.
    fn cancel(&mut self, id: TimerId) -> bool;
    /// Retire et retourne les taches echues, par echeance croissante.
    fn take_due(&mut self) -> Vec<DeferredTask>;
}

/// Entree de la file.
#[derive(Debug)]
struct Pending {
    id: TimerId,
    deadline: Instant,
    task: DeferredTask,
}

/// File de taches differees sur une horloge injectable.
#[derive(Debug)]
pub struct TimerQueue<C: Clock> {
    clock: C,
    next_id: u64,
    pending: Vec<Pending>,
}

impl<C: Clock> TimerQueue<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, next_id: 0, pending: Vec::new() }
    }

    /// Nombre de taches en attente.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Echeance la plus proche, s'il y en a une.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.deadline).min()
    }

    /// Horloge utilisee par la file.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock> DeferredScheduler for TimerQueue<C> {
    fn schedule(&mut self, delay: Duration, task: DeferredTask) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let deadline = self.clock.now() + delay;
        self.pending.push(Pending { id, deadline, task });
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    fn take_due(&mut self) -> Vec<DeferredTask> {
        let now = self.clock.now();
        let (mut due, rest): (Vec<Pending>, Vec<Pending>) =
            self.pending.drain(..).partition(|p| p.deadline <= now);
        self.pending = rest;
        due.sort_by_key(|p| (p.deadline, p.id.0));
        due.into_iter().map(|p| p.task).collect()
    }
}
