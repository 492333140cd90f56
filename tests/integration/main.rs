mod chain;
mod logging;
