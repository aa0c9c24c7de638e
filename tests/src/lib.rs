//! Tests that drive several workspace crates together.

#[cfg(test)]
mod conformance;
#[cfg(test)]
mod substitution_flows;
