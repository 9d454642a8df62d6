use assertions::{fals, tru, Error};

fn check_port(port: u16) -> assertions::Result<u16> {
    tru!(port >= 1024, "Port %d is reserved", port)?;
    fals!(port == 8080, "Port %d is taken by %s", port, "the proxy")?;

    Ok(port)
}

fn main() {
    assert_eq!(check_port(9000), Ok(9000));
    assert_eq!(
        check_port(80),
        Err(Error::Violation("Port 80 is reserved".to_owned()))
    );
    assert_eq!(
        check_port(8080),
        Err(Error::Violation("Port 8080 is taken by the proxy".to_owned()))
    );
}
