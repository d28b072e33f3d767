mod export;
mod history;
mod validation;
