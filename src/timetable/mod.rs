pub mod layout;

#[cfg(test)]
mod tests;
