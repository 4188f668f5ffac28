//! Analysis benchmarks
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use awaitlint::{ConfigureAwaitFix, RuleEngine, SourceTree};

const CSHARP_SAMPLE: &str = r#"
using System.Threading.Tasks;

namespace Orders
{
    public class OrderService
    {
        private readonly IOrderRepository repository;
        private readonly INotifier notifier;

        public async Task<Order> GetOrderAsync(int id)
        {
            var order = await repository.FindAsync(id).ConfigureAwait(false);
            return order;
        }

        public async Task PlaceOrder(Order order)
        {
            await repository.SaveAsync(order);
            await notifier.NotifyAsync(order.CustomerId).ConfigureAwait(true);
        }

        public Task<int> CountPending()
        {
            return repository.CountAsync(OrderState.Pending);
        }

        public async Task ArchiveAsync()
        {
            await repository.ArchiveCompletedAsync().ConfigureAwait(false);
        }
    }
}"#;

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_order_service", |b| {
        b.iter(|| SourceTree::parse(black_box(CSHARP_SAMPLE)).unwrap())
    });
}

fn bench_analyze(c: &mut Criterion) {
    let engine = RuleEngine::with_default_rules();
    let tree = SourceTree::parse(CSHARP_SAMPLE).unwrap();

    c.bench_function("analyze_order_service", |b| {
        b.iter(|| engine.analyze(black_box(&tree)))
    });
}

fn bench_fix(c: &mut Criterion) {
    let engine = RuleEngine::with_default_rules();
    let tree = SourceTree::parse(CSHARP_SAMPLE).unwrap();
    let span = engine
        .analyze(&tree)
        .into_iter()
        .find(|diagnostic| ConfigureAwaitFix::applies_to(diagnostic))
        .expect("sample contains a fixable await")
        .span;

    c.bench_function("fix_missing_configure_await", |b| {
        b.iter(|| ConfigureAwaitFix::fix(black_box(&tree), black_box(span)))
    });
}

criterion_group!(benches, bench_parse, bench_analyze, bench_fix);
criterion_main!(benches);
