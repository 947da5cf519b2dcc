mod access;
mod search;
