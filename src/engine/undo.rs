// src/engine/undo.rs
//! Ограниченная история состояний поверх любого `Reducer`.
//!
//! Redo нет: после undo выброшенное состояние не восстановить.

use std::collections::VecDeque;

use crate::engine::{Reducer, Transition};

/// Сколько прошлых состояний хранится. Самые старые выбрасываются молча.
pub const UNDO_LIMIT: usize = 200;

/// Действие, которое обёртка истории должна перехватить как undo.
pub trait UndoRequest {
    fn is_undo(&self) -> bool;
}

/// Текущее состояние + стек прошлых (последнее — самое свежее).
#[derive(Clone, Debug, PartialEq)]
pub struct Undoable<S> {
    pub present: S,
    past: VecDeque<S>,
}

impl<S> Undoable<S> {
    /// Пустая история.
    pub fn new(present: S) -> Self {
        Self {
            present,
            past: VecDeque::new(),
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.past.len()
    }

    pub fn past(&self) -> impl Iterator<Item = &S> {
        self.past.iter()
    }
}

/// Декоратор: `undo` снимает состояние со стека, остальное уходит во внутренний редьюсер.
#[derive(Clone, Debug)]
pub struct UndoReducer<R> {
    inner: R,
    limit: usize,
}

impl<R> UndoReducer<R> {
    pub fn new(inner: R) -> Self {
        Self::with_limit(inner, UNDO_LIMIT)
    }

    pub fn with_limit(inner: R, limit: usize) -> Self {
        Self { inner, limit }
    }
}

impl<R> Reducer for UndoReducer<R>
where
    R: Reducer,
    R::State: Clone,
    R::Action: UndoRequest,
{
    type State = Undoable<R::State>;
    type Action = R::Action;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Transition<Self::State> {
        if action.is_undo() {
            let mut past = state.past.clone();
            return match past.pop_back() {
                Some(previous) => Transition::Changed(Undoable {
                    present: previous,
                    past,
                }),
                None => Transition::Unchanged,
            };
        }

        match self.inner.reduce(&state.present, action) {
            Transition::Unchanged => Transition::Unchanged,
            Transition::Changed(present) => {
                let mut past = state.past.clone();
                past.push_back(state.present.clone());
                while past.len() > self.limit {
                    past.pop_front();
                }
                Transition::Changed(Undoable { present, past })
            }
        }
    }
}
