pub mod ac;
pub mod links;
pub mod trie;
