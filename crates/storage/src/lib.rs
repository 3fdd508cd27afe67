#![warn(clippy::pedantic)]

pub mod memory;
pub mod rest;

#[cfg(test)]
mod tests {
    pub mod data;
}
