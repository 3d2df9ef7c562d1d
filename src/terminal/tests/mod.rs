//! Terminal implementation tests

#[cfg(test)]
mod selection;
