mod courts;
mod helper;
