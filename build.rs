//! Generates the `grpcerrors.GRPCErrors` client and server stubs.
//!
//! The service is described with tonic-build's manual builder so no `protoc`
//! is needed; the `Data` message itself is a hand-written `prost::Message`
//! in `src/common/messages.rs`.
//!
//! `StreamRequest` is declared with a streaming response: a request stream
//! that ends before its first message must be able to complete with an OK
//! status and no reply, which a unary response cannot express. On the wire
//! this is indistinguishable from a client-streaming call.

use tonic_build::manual::{Builder, Method, Service};

const DATA: &str = "crate::common::messages::Data";
const CODEC: &str = "tonic::codec::ProstCodec";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let service = Service::builder()
        .name("GRPCErrors")
        .package("grpcerrors")
        .method(
            Method::builder()
                .name("simple_rpc")
                .route_name("SimpleRPC")
                .input_type(DATA)
                .output_type(DATA)
                .codec_path(CODEC)
                .build(),
        )
        .method(
            Method::builder()
                .name("stream_response")
                .route_name("StreamResponse")
                .input_type(DATA)
                .output_type(DATA)
                .codec_path(CODEC)
                .server_streaming()
                .build(),
        )
        .method(
            Method::builder()
                .name("stream_request")
                .route_name("StreamRequest")
                .input_type(DATA)
                .output_type(DATA)
                .codec_path(CODEC)
                .client_streaming()
                .server_streaming()
                .build(),
        )
        .method(
            Method::builder()
                .name("stream_request_response")
                .route_name("StreamRequestResponse")
                .input_type(DATA)
                .output_type(DATA)
                .codec_path(CODEC)
                .client_streaming()
                .server_streaming()
                .build(),
        )
        .build();

    Builder::new().compile(&[service]);
}
