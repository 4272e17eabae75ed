pub mod tvm;
