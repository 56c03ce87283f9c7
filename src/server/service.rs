//! # Error-Test Service
//!
//! Implements the four methods of `grpcerrors.GRPCErrors`. Every method looks
//! at the request's [`Behavior`] and either fails after a delay, echoes the
//! request after a delay, or rejects the mode as unimplemented.
//!
//! | Method | Mode 2 reply |
//! |---|---|
//! | `SimpleRPC` | the request |
//! | `StreamResponse` | one message, then the stream closes |
//! | `StreamRequest` | reads one message, replies once, then closes |
//! | `StreamRequestResponse` | reads one message, replies once, then closes |
//!
//! The streaming-request methods only ever read the first inbound message. A
//! request stream that ends before it completes the call with an OK status and
//! no reply.

use log::{debug, info};
use tokio::time::sleep;
use tonic::{Request, Response, Status, Streaming};

use crate::common::behavior::Behavior;
use crate::common::messages::{Data, GrpcErrors};

/// Message carried by the mode 1 failure.
pub const SIMULATED_ERROR: &str = "simulated error mode 1";

/// Message carried by the `Unimplemented` status for unknown modes.
pub const UNIMPLEMENTED_MODE: &str = "mode not implemented";

/// Response stream holding at most one message.
pub type DataStream = tokio_stream::Iter<std::option::IntoIter<Result<Data, Status>>>;

/// Stateless handler for the error-test service.
#[derive(Debug, Default, Clone, Copy)]
pub struct ErrorTestService;

impl ErrorTestService {
    pub fn new() -> Self {
        Self
    }
}

/// Applies the request's behavior, returning the echo or the simulated failure.
pub async fn respond(data: Data) -> Result<Data, Status> {
    let behavior = Behavior::from_data(&data);
    debug!("Data {} resolved to behavior: {}", data, behavior);

    match behavior {
        Behavior::FailAfter(delay) => {
            sleep(delay).await;
            Err(Status::unknown(SIMULATED_ERROR))
        }
        Behavior::SucceedAfter(delay) => {
            sleep(delay).await;
            Ok(data)
        }
        Behavior::Unimplemented => Err(Status::unimplemented(UNIMPLEMENTED_MODE)),
    }
}

fn single(data: Option<Data>) -> DataStream {
    tokio_stream::iter(data.map(Ok))
}

/// Reads the first message of a request stream and answers it.
///
/// `Ok(None)` means the client closed the stream without sending anything.
async fn respond_to_first(
    method: &str,
    mut stream: Streaming<Data>,
) -> Result<Option<Data>, Status> {
    let Some(data) = stream.message().await? else {
        info!("{} stream closed before any message", method);
        return Ok(None);
    };

    info!("{} called with data {}", method, data);
    respond(data).await.map(Some)
}

#[tonic::async_trait]
impl GrpcErrors for ErrorTestService {
    type StreamResponseStream = DataStream;
    type StreamRequestStream = DataStream;
    type StreamRequestResponseStream = DataStream;

    async fn simple_rpc(&self, request: Request<Data>) -> Result<Response<Data>, Status> {
        let data = request.into_inner();
        info!("SimpleRPC called with data {}", data);

        let reply = respond(data).await?;
        Ok(Response::new(reply))
    }

    async fn stream_response(
        &self,
        request: Request<Data>,
    ) -> Result<Response<Self::StreamResponseStream>, Status> {
        let data = request.into_inner();
        info!("StreamResponse called with data {}", data);

        let reply = respond(data).await?;
        Ok(Response::new(single(Some(reply))))
    }

    async fn stream_request(
        &self,
        request: Request<Streaming<Data>>,
    ) -> Result<Response<Self::StreamRequestStream>, Status> {
        let reply = respond_to_first("StreamRequest", request.into_inner()).await?;
        Ok(Response::new(single(reply)))
    }

    async fn stream_request_response(
        &self,
        request: Request<Streaming<Data>>,
    ) -> Result<Response<Self::StreamRequestResponseStream>, Status> {
        let reply = respond_to_first("StreamRequestResponse", request.into_inner()).await?;
        Ok(Response::new(single(reply)))
    }
}
