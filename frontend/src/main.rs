fn main() {
    reservemate_frontend::start();
}
