mod arith;
mod cmp;
