use core_proc_macros::ApiResource;

#[derive(ApiResource)]
#[allow(dead_code)]
pub struct Event {
    title: String,
}

fn main() {
    assert_eq!(<Event as ApiResource>::URL_WITH_ID, "/events/{id}");
}
