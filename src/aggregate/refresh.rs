//! Neuaufbau und Rückschreiben des Selektions-Aggregats über eine Entity-Sammlung.
//!
//! Kein inkrementelles Update: jede Selektionsänderung baut das Aggregat in
//! O(N) komplett neu auf.

use super::SelectionAggregate;
use crate::core::Editable;

/// Baut das Aggregat aus allen selektierten Entities in gespeicherter Reihenfolge neu auf.
pub fn refresh_selection<'a, E, I>(entities: I, aggregate: &mut SelectionAggregate<E>)
where
    E: Editable + 'a,
    I: IntoIterator<Item = &'a E>,
{
    aggregate.reset();
    for entity in entities {
        if entity.is_selected() {
            aggregate.merge(entity);
        }
    }
}

/// Schreibt das Aggregat auf jede selektierte Entity zurück.
///
/// Gibt die Anzahl der beschriebenen Entities zurück.
pub fn propagate_selection<'a, E, I>(entities: I, aggregate: &SelectionAggregate<E>) -> usize
where
    E: Editable + 'a,
    I: IntoIterator<Item = &'a mut E>,
{
    if aggregate.is_empty() {
        return 0;
    }

    let mut written = 0;
    for entity in entities {
        if entity.is_selected() {
            aggregate.push(entity);
            written += 1;
        }
    }
    written
}
