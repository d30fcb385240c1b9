fn main() {
    vendor_dashboard::start();
}
