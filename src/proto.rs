// Checked-in prost/tonic code for the subset of `lnrpc.Lightning` this crate calls.
// Field tags follow LND's lightning.proto; fields not listed are skipped on decode.
pub mod lnrpc {
    #![allow(clippy::all, clippy::pedantic)]
    include!("proto/lnrpc.rs");
}
