//! Process catalog and process-URI grammar.
//!
//! Tasks name the process they trigger through their `instantiatesUri`,
//! `<base>/bpe/Process/<name>/<major>.<minor>.<patch>`. Together with the
//! task's message name this forms a [`domain::ProcessKey`] that the
//! [`ports::ProcessCatalog`] must recognise, and permit for the caller,
//! before a task may be created.

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
