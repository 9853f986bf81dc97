// relay endpoint
//
// each form gets a url constant and a client function that posts the form
// url-encoded and unpacks the json envelope.  the server routes on the same
// constants so the two sides cannot drift apart
macro_rules! relay_endpoint {
    ($s:ident, $path:literal) => {
        paste::paste! {
            pub const [<$s:upper _URL>]: &str = concat!("/api/", $path);

            pub async fn [<send_ $s:lower>](req: &[<$s Req>]) -> anyhow::Result<()> {
                post_form([<$s:upper _URL>], req).await
            }
        }
    };
}

pub mod relay;
