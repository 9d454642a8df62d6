fn main() {
    let name = String::from("retries");
    let limit = 3u8;

    let error = assertions::tru!(false, "%2$s of %1$s exceeded%n100%% used", name, limit)
        .unwrap_err();
    assert_eq!(error.message(), "3 of retries exceeded\n100% used");

    let error = assertions::tru!(false, "nothing to fill in").unwrap_err();
    assert_eq!(error.message(), "nothing to fill in");

    let error = assertions::fals!(true, "%-5s|%05.1f|%x", 'a', 2.5, 255,).unwrap_err();
    assert_eq!(error.message(), "a    |002.5|ff");

    // The arguments are only borrowed.
    assert_eq!(name, "retries");
}
