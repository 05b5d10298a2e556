// ============================================================================
// Static stylesheet and behaviour for the HTML report
// ============================================================================

pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js";

pub const STYLE: &str = r#"
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; padding: 20px; background-color: #f8f9fa; }
.container { max-width: 1200px; margin: 0 auto; }
.header { background: linear-gradient(135deg, #2196F3, #1976D2); color: white; padding: 30px; border-radius: 12px; margin-bottom: 30px; text-align: center; }
.header h1 { margin: 0; font-size: 2.5em; font-weight: 300; }
.header p { margin: 10px 0; opacity: 0.9; }
.metadata { display: flex; flex-wrap: wrap; justify-content: center; gap: 10px; margin-top: 10px; }
.metadata span { background: rgba(255,255,255,0.15); padding: 4px 10px; border-radius: 12px; font-size: 0.85em; }
.stats-dashboard { display: grid; grid-template-columns: 2fr 1fr; gap: 20px; margin-bottom: 30px; }
.stats-cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 15px; }
.stat-card { background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); text-align: center; }
.stat-number { font-size: 2em; font-weight: bold; margin-bottom: 5px; }
.stat-label { color: #666; font-size: 0.9em; }
.stat-passed { color: #4CAF50; }
.stat-failed { color: #f44336; }
.stat-skipped { color: #ff9800; }
.stat-total { color: #2196F3; }
.stat-duration { color: #ff9800; }
.chart-container { background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
.chart-container canvas { max-height: 300px; }
.summary { background: white; padding: 25px; border-radius: 10px; margin: 20px 0; box-shadow: 0 4px 12px rgba(0,0,0,0.1); }
.summary-bar { display: flex; justify-content: space-between; align-items: center; margin-bottom: 20px; }
.summary-bar button { margin-left: 10px; padding: 8px 15px; border: 1px solid #2196F3; background: white; color: #2196F3; border-radius: 4px; cursor: pointer; }
.scenario { background: white; margin: 20px 0; border-radius: 10px; box-shadow: 0 4px 12px rgba(0,0,0,0.1); overflow: hidden; transition: transform 0.2s; }
.scenario:hover { transform: translateY(-2px); }
.scenario-header { padding: 20px; cursor: pointer; display: flex; justify-content: space-between; align-items: center; transition: background-color 0.2s; }
.scenario-header:hover { background-color: #f8f9fa; }
.scenario-meta { display: flex; gap: 20px; align-items: center; }
.scenario-meta span { padding: 5px 10px; border-radius: 15px; font-size: 0.85em; }
.status { background: #e9ecef; color: #495057; }
.duration { background: #fff3cd; color: #856404; }
.expand-icon { font-size: 1.2em; transition: transform 0.3s; }
.expand-icon.expanded { transform: rotate(180deg); }
.passed { border-left: 5px solid #4CAF50; }
.failed { border-left: 5px solid #f44336; }
.skipped { border-left: 5px solid #ff9800; }
.scenario-steps { padding: 0 20px 20px; background: #f8f9fa; }
.scenario-error { color: #c62828; background: #fdecea; padding: 10px 15px; border-radius: 6px; white-space: pre-wrap; font-family: monospace; }
.step { background: white; margin: 10px 0; padding: 15px; border-radius: 6px; border-left: 3px solid #ddd; }
.step-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 10px; }
.step-name { font-weight: 500; color: #333; }
.step-icon { margin-right: 8px; }
.step-status { padding: 3px 8px; border-radius: 10px; font-size: 0.75em; font-weight: bold; }
.step-status.passed { background: #d4edda; color: #155724; border-left: none; }
.step-screenshot img { max-width: 150px; border: 1px solid #ddd; border-radius: 4px; cursor: pointer; transition: transform 0.2s; }
.step-screenshot img:hover { transform: scale(1.02); }
.screenshot-gallery { margin: 20px 0; padding: 20px; background: white; border-radius: 10px; box-shadow: 0 4px 12px rgba(0,0,0,0.1); }
.screenshot { margin: 15px; display: inline-block; text-align: center; transition: transform 0.2s; }
.screenshot:hover { transform: translateY(-5px); }
.screenshot img { max-width: 180px; border: 2px solid #ddd; border-radius: 6px; cursor: pointer; transition: all 0.2s; }
.screenshot img:hover { border-color: #2196F3; box-shadow: 0 4px 15px rgba(33, 150, 243, 0.3); }
.screenshot-title { font-size: 0.8em; margin-top: 8px; color: #666; font-weight: 500; }
.modal { display: none; position: fixed; z-index: 1000; left: 0; top: 0; width: 100%; height: 100%; background: rgba(0,0,0,0.9); }
.modal-content { margin: 2% auto; display: block; max-width: 95%; max-height: 95%; border-radius: 8px; }
.close { position: absolute; top: 20px; right: 35px; color: #f1f1f1; font-size: 40px; font-weight: bold; cursor: pointer; transition: color 0.2s; }
.close:hover { color: #2196F3; }
h1, h2, h3 { margin-top: 0; }
h2 { color: #2196F3; }
.timestamp { font-size: 0.9em; opacity: 0.8; margin-top: 15px; }
.footer { text-align: center; margin-top: 40px; color: #666; font-size: 0.9em; }
@media (max-width: 768px) {
  .stats-dashboard { grid-template-columns: 1fr; }
  .scenario-meta { flex-direction: column; gap: 10px; }
  .container { padding: 10px; }
}
"#;

/// Modal viewer and panel toggling. Image sources are read from
/// `data-src` attributes, never spliced into script text.
pub const SCRIPT: &str = r#"
function openModal(src) {
  document.getElementById('modal').style.display = 'block';
  document.getElementById('modal-img').src = src;
}
function closeModal() {
  document.getElementById('modal').style.display = 'none';
}
function toggleSteps(index) {
  const steps = document.getElementById('steps-' + index);
  const icon = document.getElementById('expand-' + index);
  if (steps.style.display === 'none') {
    steps.style.display = 'block';
    icon.classList.add('expanded');
  } else {
    steps.style.display = 'none';
    icon.classList.remove('expanded');
  }
}
function setAllSteps(expanded) {
  document.querySelectorAll('.scenario-steps').forEach(s => s.style.display = expanded ? 'block' : 'none');
  document.querySelectorAll('.expand-icon').forEach(i => expanded ? i.classList.add('expanded') : i.classList.remove('expanded'));
}
function expandAll() { setAllSteps(true); }
function collapseAll() { setAllSteps(false); }
document.addEventListener('keydown', function(e) {
  if (e.key === 'Escape') closeModal();
});
document.addEventListener('click', function(e) {
  const src = e.target && e.target.dataset ? e.target.dataset.src : undefined;
  if (src) openModal(src);
});
"#;

/// Doughnut chart of the pass/fail/skip split.
pub fn chart_script(passed: usize, failed: usize, skipped: usize) -> String {
    format!(
        r#"
window.addEventListener('load', function() {{
  if (typeof Chart === 'undefined') return;
  const ctx = document.getElementById('resultsChart').getContext('2d');
  new Chart(ctx, {{
    type: 'doughnut',
    data: {{
      labels: ['Passed', 'Failed', 'Skipped'],
      datasets: [{{
        data: [{passed}, {failed}, {skipped}],
        backgroundColor: ['#4CAF50', '#f44336', '#ff9800'],
        borderWidth: 0
      }}]
    }},
    options: {{
      responsive: true,
      plugins: {{
        title: {{ display: true, text: 'Test Results Distribution' }},
        legend: {{ position: 'bottom' }}
      }}
    }}
  }});
}});
"#
    )
}
