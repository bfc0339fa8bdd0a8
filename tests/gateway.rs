use std::{
    collections::HashMap,
    convert::Infallible,
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex},
    task::{Context, Poll},
    time::Duration,
};

use async_trait::async_trait;
use bytes::{BufMut, Bytes, BytesMut};
use futures::{stream, StreamExt};
use http::{HeaderMap, HeaderValue};
use http_body::Frame;
use http_body_util::{BodyExt, StreamBody};
use lnd_gateway::{
    lnrpc,
    transport::{Transport, TransportError},
    Gateway, GatewayError, InvoiceOptions, ListInvoicesOptions, SubscriptionOptions,
};
use prost::Message;
use tonic::{body::BoxBody, Code};

const MACAROON: &str = "0201036c6e64";
const PUBKEY: &str = "02eec7245d6b7d2ccb30380bfbe2a3648cd7a942653f5aa340edcea1f283686619";

#[derive(Clone)]
enum Reply {
    Unary(Vec<u8>),
    Stream { messages: Vec<Vec<u8>>, hold_open: bool },
    Status(Code, &'static str),
}

struct RecordedCall {
    path: String,
    macaroon: Option<String>,
    body: Bytes,
}

#[derive(Default)]
struct NodeState {
    calls: Vec<RecordedCall>,
    replies: HashMap<&'static str, Reply>,
}

/// In-process stand-in for LND: records each request and answers with canned gRPC frames.
#[derive(Clone, Default)]
struct MockNode {
    state: Arc<Mutex<NodeState>>,
}

impl MockNode {
    fn reply(&self, path: &'static str, reply: Reply) {
        self.state.lock().unwrap().replies.insert(path, reply);
    }

    fn reply_with<M: Message>(&self, path: &'static str, msg: &M) {
        self.reply(path, Reply::Unary(msg.encode_to_vec()));
    }

    fn last_request<M: Message + Default>(&self, path: &str) -> M {
        let state = self.state.lock().unwrap();
        let call = state
            .calls
            .iter()
            .rev()
            .find(|c| c.path == path)
            .expect("call recorded");
        M::decode(&call.body[5..]).expect("decode request")
    }

    fn macaroons(&self) -> Vec<Option<String>> {
        let state = self.state.lock().unwrap();
        state.calls.iter().map(|c| c.macaroon.clone()).collect()
    }
}

fn grpc_frame(msg: &[u8]) -> Bytes {
    let mut buf = BytesMut::with_capacity(msg.len() + 5);
    buf.put_u8(0);
    buf.put_u32(msg.len() as u32);
    buf.put_slice(msg);
    buf.freeze()
}

fn ok_trailers() -> HeaderMap {
    let mut trailers = HeaderMap::new();
    trailers.insert("grpc-status", HeaderValue::from_static("0"));
    trailers
}

fn respond(reply: Option<Reply>) -> http::Response<BoxBody> {
    let reply = reply.unwrap_or(Reply::Status(Code::Unimplemented, "no reply configured"));
    let mut builder = http::Response::builder()
        .status(200)
        .header("content-type", "application/grpc");
    let body = match reply {
        Reply::Unary(msg) => {
            let frames = vec![
                Ok::<_, Infallible>(Frame::data(grpc_frame(&msg))),
                Ok(Frame::trailers(ok_trailers())),
            ];
            tonic::body::boxed(StreamBody::new(stream::iter(frames)))
        }
        Reply::Stream {
            messages,
            hold_open,
        } => {
            let data = stream::iter(
                messages
                    .into_iter()
                    .map(|m| Ok::<_, Infallible>(Frame::data(grpc_frame(&m)))),
            );
            let frames = if hold_open {
                data.chain(stream::pending()).boxed()
            } else {
                data.chain(stream::iter(vec![Ok(Frame::trailers(ok_trailers()))]))
                    .boxed()
            };
            tonic::body::boxed(StreamBody::new(frames))
        }
        Reply::Status(code, message) => {
            builder = builder
                .header("grpc-status", (code as i32).to_string())
                .header("grpc-message", message);
            tonic::body::empty_body()
        }
    };
    builder.body(body).unwrap()
}

impl tower::Service<http::Request<BoxBody>> for MockNode {
    type Response = http::Response<BoxBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<BoxBody>) -> Self::Future {
        let state = self.state.clone();
        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let path = parts.uri.path().to_string();
            let macaroon = parts
                .headers
                .get("macaroon")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = body
                .collect()
                .await
                .map(|c| c.to_bytes())
                .unwrap_or_default();
            let reply = {
                let mut state = state.lock().unwrap();
                let reply = state.replies.get(path.as_str()).cloned();
                state.calls.push(RecordedCall {
                    path,
                    macaroon,
                    body,
                });
                reply
            };
            Ok(respond(reply))
        })
    }
}

struct MockTransport {
    node: MockNode,
}

#[async_trait]
impl Transport for MockTransport {
    type Svc = MockNode;

    async fn service(&self) -> Result<Self::Svc, TransportError> {
        Ok(self.node.clone())
    }

    fn metadata(&self) -> Vec<(String, String)> {
        vec![("macaroon".to_string(), MACAROON.to_string())]
    }
}

fn gateway() -> (Gateway<MockTransport>, MockNode) {
    let node = MockNode::default();
    let gateway = Gateway::new(MockTransport { node: node.clone() });
    (gateway, node)
}

fn invoice(add_index: u64, settle_index: u64) -> lnrpc::Invoice {
    lnrpc::Invoice {
        add_index,
        settle_index,
        memo: format!("invoice-{add_index}"),
        state: if settle_index > 0 {
            lnrpc::invoice::InvoiceState::Settled as i32
        } else {
            lnrpc::invoice::InvoiceState::Open as i32
        },
        ..Default::default()
    }
}

#[tokio::test]
async fn get_node_info_returns_response_verbatim() {
    let (gateway, node) = gateway();
    let info = lnrpc::GetInfoResponse {
        identity_pubkey: PUBKEY.to_string(),
        alias: "alice".to_string(),
        num_active_channels: 3,
        num_pending_channels: 1,
        chains: vec![lnrpc::Chain {
            chain: "bitcoin".to_string(),
            network: "regtest".to_string(),
        }],
        ..Default::default()
    };
    node.reply_with("/lnrpc.Lightning/GetInfo", &info);

    let got = gateway.get_node_info().await.expect("get info");
    assert_eq!(got, info);
    assert_eq!(node.macaroons(), vec![Some(MACAROON.to_string())]);
}

#[tokio::test]
async fn get_peer_info_forwards_pubkey_unmodified() {
    let (gateway, node) = gateway();
    node.reply_with(
        "/lnrpc.Lightning/GetNodeInfo",
        &lnrpc::NodeInfo {
            num_channels: 7,
            total_capacity: 5_000_000,
            ..Default::default()
        },
    );

    let info = gateway.get_peer_info(PUBKEY).await.expect("node info");
    assert_eq!(info.num_channels, 7);
    let req: lnrpc::NodeInfoRequest = node.last_request("/lnrpc.Lightning/GetNodeInfo");
    assert_eq!(req.pub_key, PUBKEY);
    assert!(!req.include_channels);

    gateway
        .get_peer_info_with_channels(PUBKEY)
        .await
        .expect("node info");
    let req: lnrpc::NodeInfoRequest = node.last_request("/lnrpc.Lightning/GetNodeInfo");
    assert!(req.include_channels);
}

#[tokio::test]
async fn unknown_peer_surfaces_node_status() {
    let (gateway, node) = gateway();
    node.reply(
        "/lnrpc.Lightning/GetNodeInfo",
        Reply::Status(Code::NotFound, "unable to find node"),
    );

    let err = gateway.get_peer_info(PUBKEY).await.unwrap_err();
    let status = err.status().expect("grpc status");
    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(status.message(), "unable to find node");
}

#[tokio::test]
async fn create_invoice_defaults_to_open_amount() {
    let (gateway, node) = gateway();
    node.reply_with(
        "/lnrpc.Lightning/AddInvoice",
        &lnrpc::AddInvoiceResponse {
            payment_request: "lnbcrt1p0example".to_string(),
            add_index: 12,
            ..Default::default()
        },
    );

    let res = gateway
        .create_invoice(InvoiceOptions::default())
        .await
        .expect("add invoice");
    assert_eq!(res.payment_request, "lnbcrt1p0example");
    assert_eq!(res.add_index, 12);

    let req: lnrpc::Invoice = node.last_request("/lnrpc.Lightning/AddInvoice");
    assert_eq!(req.value, 0);
    assert_eq!(req.memo, "");

    gateway
        .create_invoice(InvoiceOptions::default().value(21).expiry(300).memo("tip"))
        .await
        .expect("add invoice");
    let req: lnrpc::Invoice = node.last_request("/lnrpc.Lightning/AddInvoice");
    assert_eq!((req.value, req.expiry, req.memo.as_str()), (21, 300, "tip"));
}

#[tokio::test]
async fn list_invoices_sends_default_page_and_returns_cursors() {
    let (gateway, node) = gateway();
    node.reply_with(
        "/lnrpc.Lightning/ListInvoices",
        &lnrpc::ListInvoiceResponse {
            invoices: vec![invoice(1, 0), invoice(2, 1)],
            first_index_offset: 1,
            last_index_offset: 2,
        },
    );

    let page = gateway
        .list_invoices(ListInvoicesOptions::default())
        .await
        .expect("list invoices");
    assert_eq!(page.invoices.len(), 2);
    assert_eq!((page.first_index_offset, page.last_index_offset), (1, 2));

    let req: lnrpc::ListInvoiceRequest = node.last_request("/lnrpc.Lightning/ListInvoices");
    assert_eq!(req.num_max_invoices, 100);
    assert_eq!(req.index_offset, 0);
    assert!(!req.pending_only);
    assert!(!req.reversed);
}

#[tokio::test]
async fn decode_pay_req_forwards_string() {
    let (gateway, node) = gateway();
    node.reply_with(
        "/lnrpc.Lightning/DecodePayReq",
        &lnrpc::PayReq {
            destination: PUBKEY.to_string(),
            num_satoshis: 1_000,
            description: "coffee".to_string(),
            ..Default::default()
        },
    );

    let decoded = gateway
        .decode_pay_req("lnbcrt10u1pexample")
        .await
        .expect("decode");
    assert_eq!(decoded.num_satoshis, 1_000);
    let req: lnrpc::PayReqString = node.last_request("/lnrpc.Lightning/DecodePayReq");
    assert_eq!(req.pay_req, "lnbcrt10u1pexample");
}

#[tokio::test]
async fn subscribe_replays_then_delivers_in_arrival_order() {
    let (gateway, node) = gateway();
    node.reply(
        "/lnrpc.Lightning/SubscribeInvoices",
        Reply::Stream {
            messages: vec![
                invoice(6, 0).encode_to_vec(),
                invoice(7, 0).encode_to_vec(),
                invoice(6, 3).encode_to_vec(),
            ],
            hold_open: false,
        },
    );

    let mut events = gateway
        .subscribe_invoices(SubscriptionOptions::default().add_index(5))
        .await
        .expect("subscribe");
    let req: lnrpc::InvoiceSubscription =
        node.last_request("/lnrpc.Lightning/SubscribeInvoices");
    assert_eq!(req.add_index, 5);
    assert_eq!(req.settle_index, 0);

    let mut seen = Vec::new();
    while let Some(inv) = events.next().await.expect("event") {
        seen.push((inv.add_index, inv.settle_index));
    }
    assert_eq!(seen, vec![(6, 0), (7, 0), (6, 3)]);
    assert_eq!(node.macaroons(), vec![Some(MACAROON.to_string())]);
}

#[tokio::test]
async fn subscribe_without_indices_requests_live_events_only() {
    let (gateway, node) = gateway();
    node.reply(
        "/lnrpc.Lightning/SubscribeInvoices",
        Reply::Stream {
            messages: Vec::new(),
            hold_open: false,
        },
    );

    let mut events = gateway
        .subscribe_invoices(SubscriptionOptions::default())
        .await
        .expect("subscribe");
    assert!(events.next().await.expect("end").is_none());
    let req: lnrpc::InvoiceSubscription =
        node.last_request("/lnrpc.Lightning/SubscribeInvoices");
    assert_eq!((req.add_index, req.settle_index), (0, 0));
}

#[tokio::test]
async fn handler_error_closes_subscription() {
    let (gateway, node) = gateway();
    node.reply(
        "/lnrpc.Lightning/SubscribeInvoices",
        Reply::Stream {
            messages: vec![
                invoice(1, 0).encode_to_vec(),
                invoice(2, 0).encode_to_vec(),
                invoice(3, 0).encode_to_vec(),
            ],
            hold_open: true,
        },
    );

    let mut handled = Vec::new();
    let err = gateway
        .subscribe_invoices_with(SubscriptionOptions::default(), |inv| {
            handled.push(inv.add_index);
            if inv.add_index == 2 {
                Err("database unavailable")
            } else {
                Ok(())
            }
        })
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Handler(_)));
    assert_eq!(err.to_string(), "invoice handler failed: database unavailable");
    assert_eq!(handled, vec![1, 2]);
}

#[tokio::test]
async fn cancellation_ends_an_open_stream() {
    let (gateway, node) = gateway();
    node.reply(
        "/lnrpc.Lightning/SubscribeInvoices",
        Reply::Stream {
            messages: vec![invoice(1, 0).encode_to_vec()],
            hold_open: true,
        },
    );

    let mut events = gateway
        .subscribe_invoices(SubscriptionOptions::default())
        .await
        .expect("subscribe");
    let first = events.next().await.expect("event").expect("invoice");
    assert_eq!(first.add_index, 1);

    let token = events.cancellation_token();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        token.cancel();
    });
    let next = tokio::time::timeout(Duration::from_secs(5), events.next())
        .await
        .expect("cancellation wakes next()")
        .expect("no error");
    assert!(next.is_none());
    assert!(events.is_cancelled());
}

#[tokio::test]
async fn into_stream_yields_events() {
    let (gateway, node) = gateway();
    node.reply(
        "/lnrpc.Lightning/SubscribeInvoices",
        Reply::Stream {
            messages: vec![invoice(4, 0).encode_to_vec(), invoice(5, 0).encode_to_vec()],
            hold_open: false,
        },
    );

    let events = gateway
        .subscribe_invoices(SubscriptionOptions::default().settle_index(9))
        .await
        .expect("subscribe");
    let indices: Vec<u64> = events
        .into_stream()
        .map(|res| res.expect("event").add_index)
        .collect()
        .await;
    assert_eq!(indices, vec![4, 5]);
}

#[tokio::test]
async fn subscribe_rejected_by_node_returns_status() {
    let (gateway, node) = gateway();
    node.reply(
        "/lnrpc.Lightning/SubscribeInvoices",
        Reply::Status(Code::PermissionDenied, "verification failed: signature mismatch"),
    );

    let err = gateway
        .subscribe_invoices(SubscriptionOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.code()), Some(Code::PermissionDenied));
}
