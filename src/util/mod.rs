pub(crate) mod copy;
pub(crate) mod lines;

pub(crate) use copy::copy_in_chunks;
pub(crate) use lines::read_lines_normalized;
