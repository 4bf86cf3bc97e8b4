use crate::models::TimeRange;

pub fn render_index(default_range: TimeRange) -> String {
    INDEX_HTML.replace("{{RANGE}}", default_range.as_str())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>WhatsApp Click Analytics</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg-1: #f2f7f3;
      --bg-2: #d6ecd9;
      --ink: #20312a;
      --muted: #5c7065;
      --accent: #25d366;
      --accent-dark: #128c7e;
      --danger: #c0392b;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 20px 48px rgba(18, 140, 126, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top right, var(--bg-2), transparent 55%),
        linear-gradient(150deg, var(--bg-1), #e8f4ec 65%, #f4f9f2 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      backdrop-filter: blur(10px);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
      flex-wrap: wrap;
    }

    .brand {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .brand .mark {
      width: 42px;
      height: 42px;
      border-radius: 12px;
      background: linear-gradient(135deg, var(--accent), var(--accent-dark));
      display: grid;
      place-items: center;
      color: #fff;
      font-weight: 600;
      font-size: 20px;
    }

    .brand h1 {
      margin: 0;
      font-size: 22px;
      font-weight: 600;
    }

    .brand p {
      margin: 2px 0 0;
      font-size: 13px;
      color: var(--muted);
    }

    .tabs {
      display: inline-flex;
      gap: 6px;
      background: #eaf2ec;
      border-radius: 999px;
      padding: 5px;
    }

    .tab {
      border: 0;
      background: transparent;
      font: inherit;
      font-size: 14px;
      color: var(--muted);
      padding: 8px 16px;
      border-radius: 999px;
      cursor: pointer;
      transition: background 160ms ease, color 160ms ease;
    }

    .tab.active {
      background: var(--accent-dark);
      color: #fff;
    }

    .total-card {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
      background: linear-gradient(135deg, rgba(37, 211, 102, 0.12), rgba(18, 140, 126, 0.12));
      border-radius: 18px;
      padding: 20px 24px;
    }

    .total-card .value {
      font-size: 44px;
      font-weight: 600;
      color: var(--accent-dark);
    }

    .total-card .label {
      font-size: 14px;
      color: var(--muted);
    }

    .total-card .updated {
      font-size: 12px;
      color: var(--muted);
    }

    #product-list {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 14px;
    }

    #product-list li {
      display: grid;
      grid-template-columns: minmax(140px, 1fr) 3fr auto;
      align-items: center;
      gap: 14px;
      font-size: 14px;
    }

    .bar-track {
      height: 12px;
      border-radius: 999px;
      background: #e4ede6;
      overflow: hidden;
    }

    .bar {
      height: 100%;
      border-radius: inherit;
      background: linear-gradient(90deg, var(--accent), var(--accent-dark));
      transition: width 260ms ease;
    }

    .count {
      font-variant-numeric: tabular-nums;
      font-weight: 600;
      min-width: 42px;
      text-align: right;
    }

    body.loading #product-list,
    body.loading .total-card .value {
      opacity: 0.45;
    }

    #status {
      min-height: 20px;
      font-size: 13px;
      color: var(--muted);
    }

    #status.error {
      color: var(--danger);
      font-weight: 500;
    }

    .empty {
      color: var(--muted);
      font-size: 14px;
      text-align: center;
      padding: 18px 0;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div class="brand">
        <div class="mark">W</div>
        <div>
          <h1>WhatsApp Click Analytics</h1>
          <p>Storefront contact-button clicks per product</p>
        </div>
      </div>
      <nav class="tabs" aria-label="Time range">
        <button class="tab" data-range="day">Today</button>
        <button class="tab" data-range="week">This week</button>
        <button class="tab" data-range="month">This month</button>
      </nav>
    </header>

    <section class="total-card">
      <div>
        <div class="value" id="total-clicks">0</div>
        <div class="label">total clicks</div>
      </div>
      <div class="updated" id="updated-at"></div>
    </section>

    <ul id="product-list">
      <li class="empty">No data yet</li>
    </ul>

    <footer id="status" role="status"></footer>
  </main>

  <script>
    const tabs = document.querySelectorAll('.tab');
    const list = document.getElementById('product-list');
    const totalEl = document.getElementById('total-clicks');
    const updatedEl = document.getElementById('updated-at');
    const statusEl = document.getElementById('status');

    let activeRange = '{{RANGE}}';

    const setStatus = (text, kind) => {
      statusEl.textContent = text;
      statusEl.className = kind || '';
    };

    const setActiveTab = (range) => {
      tabs.forEach((button) => {
        button.classList.toggle('active', button.dataset.range === range);
      });
    };

    const renderStats = (result) => {
      totalEl.textContent = result.total_clicks;
      updatedEl.textContent = 'updated ' + new Date(result.generated_at).toLocaleTimeString();

      list.innerHTML = '';
      if (!result.stats.length) {
        const empty = document.createElement('li');
        empty.className = 'empty';
        empty.textContent = 'No data yet';
        list.appendChild(empty);
        return;
      }

      const max = Math.max(1, ...result.stats.map((stat) => stat.clicks));
      result.stats.forEach((stat) => {
        const row = document.createElement('li');

        const name = document.createElement('span');
        name.textContent = stat.product_name;

        const track = document.createElement('div');
        track.className = 'bar-track';
        const bar = document.createElement('div');
        bar.className = 'bar';
        bar.style.width = `${(stat.clicks / max) * 100}%`;
        track.appendChild(bar);

        const count = document.createElement('span');
        count.className = 'count';
        count.textContent = stat.clicks;

        row.append(name, track, count);
        list.appendChild(row);
      });
    };

    const loadRange = async (range) => {
      activeRange = range;
      setActiveTab(range);
      setStatus('Loading...', '');
      document.body.classList.add('loading');

      try {
        const res = await fetch(`/api/analytics?range=${range}`);
        if (!res.ok) {
          throw new Error((await res.text()) || 'Request failed');
        }
        const result = await res.json();
        if (range !== activeRange) {
          return;
        }
        renderStats(result);
        setStatus(result.error ? result.error.message : '', result.error ? 'error' : '');
      } catch (err) {
        if (range === activeRange) {
          setStatus(err.message, 'error');
        }
      } finally {
        if (range === activeRange) {
          document.body.classList.remove('loading');
        }
      }
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => loadRange(button.dataset.range));
    });

    loadRange(activeRange);
  </script>
</body>
</html>
"#;
